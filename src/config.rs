//! Parser configuration

use chrono::FixedOffset;

use crate::{BlogParserError, Result};

/// What to do with a non-blank line outside any section that has no colon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrayLinePolicy {
    /// Skip the line and log a warning
    #[default]
    Ignore,
    /// Fail the parse with `BlogParserError::UnrecognizedLine`
    Reject,
}

/// How a double-quoted `TAGS` token is unquoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagQuoteMode {
    /// Drop the opening quote and the last two characters, so `"tag"` becomes `ta`.
    ///
    /// This matches what existing MovableType importers produce.
    #[default]
    Literal,
    /// Drop exactly the surrounding quotes, so `"tag"` becomes `tag`
    Strip,
}

/// Parser configuration
///
/// # Example
///
/// ```
/// use blog_parser::{ParserConfig, StrayLinePolicy, TagQuoteMode};
///
/// // Defaults: ignore stray lines, literal tag unquoting, UTC timestamps
/// let config = ParserConfig::default();
/// assert_eq!(config.stray_lines, StrayLinePolicy::Ignore);
///
/// // Fail on anything the parser does not understand
/// let strict = ParserConfig::strict();
/// assert_eq!(strict.stray_lines, StrayLinePolicy::Reject);
///
/// // Export written on a US east coast server
/// let config = ParserConfig::lenient().with_utc_offset_minutes(-5 * 60);
/// assert_eq!(config.tag_quotes, TagQuoteMode::Strip);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Handling of colon-free lines outside sections
    #[cfg_attr(feature = "serde", serde(default))]
    pub stray_lines: StrayLinePolicy,

    /// Handling of quoted tags in `TAGS` lines
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag_quotes: TagQuoteMode,

    /// Offset from UTC of the wall-clock times in the export, in minutes
    ///
    /// Export dates carry no zone. Default: `0` (UTC).
    #[cfg_attr(feature = "serde", serde(default))]
    pub utc_offset_minutes: i32,
}

impl ParserConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            stray_lines: StrayLinePolicy::Ignore,
            tag_quotes: TagQuoteMode::Literal,
            utc_offset_minutes: 0,
        }
    }

    /// Reject stray lines instead of skipping them
    pub fn strict() -> Self {
        Self {
            stray_lines: StrayLinePolicy::Reject,
            ..Self::new()
        }
    }

    /// Skip stray lines and unquote tags cleanly
    pub fn lenient() -> Self {
        Self {
            stray_lines: StrayLinePolicy::Ignore,
            tag_quotes: TagQuoteMode::Strip,
            ..Self::new()
        }
    }

    /// Set the UTC offset used to interpret export dates
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Resolve the configured offset
    ///
    /// Fails with `InvalidInput` if the offset is not strictly within ±24 hours.
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                BlogParserError::InvalidInput(format!(
                    "UTC offset out of range: {} minutes",
                    self.utc_offset_minutes
                ))
            })
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
