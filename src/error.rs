//! Blog parser error types

use thiserror::Error;

/// Errors raised while parsing a blog export
///
/// Every parse error is fatal: the parse stops at the first one and no
/// partially built blog is returned. Variants raised by the line-oriented
/// parser carry the 1-based line number where the problem was detected.
#[derive(Error, Debug)]
pub enum BlogParserError {
    /// Input rejected before parsing started (empty data, bad configuration)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A section was opened but its name line is missing or does not end with `:`
    #[error("Invalid section name encountered at line {line}: {found:?}")]
    MalformedSection {
        /// Line number of the offending name line
        line: usize,
        /// The text found where a section name was expected
        found: String,
    },

    /// A date token matched neither the 12-hour nor the 24-hour pattern
    #[error("Unable to parse date {token:?} on line {line}")]
    UnparseableDate {
        /// The offending date token
        token: String,
        /// Line number the token was read from
        line: usize,
    },

    /// Input ended while a section or comment body was still open
    #[error("Unexpected end of input after line {line}")]
    UnexpectedEndOfInput {
        /// Last line read before the input ran out
        line: usize,
    },

    /// A non-blank line without a colon appeared outside any section
    #[error("Unrecognized line {line}: {content:?}")]
    UnrecognizedLine {
        /// Line number of the offending line
        line: usize,
        /// The trimmed line content
        content: String,
    },

    /// Reading from the underlying source failed
    #[error("IO error at line {line}: {source}")]
    Io {
        /// Line number being read when the failure happened
        line: usize,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Attempt to replace a url that is already set
    #[error("URL already set to {current:?}")]
    UrlAlreadySet {
        /// The url that stays in place
        current: String,
    },
}

impl BlogParserError {
    /// Line number the error was detected at, if it came from parsing
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedSection { line, .. }
            | Self::UnparseableDate { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnrecognizedLine { line, .. }
            | Self::Io { line, .. } => Some(*line),
            Self::InvalidInput(_) | Self::UrlAlreadySet { .. } => None,
        }
    }
}

/// Result type alias using BlogParserError
pub type Result<T> = std::result::Result<T, BlogParserError>;
