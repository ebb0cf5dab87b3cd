//! Export date parsing
//!
//! MovableType writes dates as `MM/dd/yyyy hh:mm:ss AM|PM`, though some
//! exporters emit a 24-hour clock with no meridiem. The trailing marker picks
//! the pattern.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::{BlogParserError, Result};

const TWELVE_HOUR: &str = "%m/%d/%Y %I:%M:%S %p";
const TWENTY_FOUR_HOUR: &str = "%m/%d/%Y %H:%M:%S";

/// Parse an export date token into a UTC timestamp
///
/// The token's wall-clock time is read in `offset`. `line` is only used for
/// the error.
pub(crate) fn parse_export_date(
    token: &str,
    line: usize,
    offset: FixedOffset,
) -> Result<DateTime<Utc>> {
    let pattern = if token.ends_with("AM") || token.ends_with("PM") {
        TWELVE_HOUR
    } else {
        TWENTY_FOUR_HOUR
    };

    let unparseable = || BlogParserError::UnparseableDate {
        token: token.to_string(),
        line,
    };

    let naive = NaiveDateTime::parse_from_str(token, pattern).map_err(|_| unparseable())?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(unparseable)
}
