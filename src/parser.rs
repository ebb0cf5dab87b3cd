//! Format-neutral parser contract

use std::io::BufRead;

use crate::Result;
use crate::domain::Blog;

/// A parser turning one blog export format into a [`Blog`]
///
/// Implementations must not keep state between calls: every call parses its
/// input from scratch and either returns a complete blog or the first error
/// encountered.
pub trait Parser {
    /// Parse an export held in memory
    ///
    /// Fails with `InvalidInput` if `data` is empty.
    fn parse_str(&self, data: &str) -> Result<Blog>;

    /// Parse an export read from `reader`
    ///
    /// The reader is consumed forward once. Fails with `InvalidInput` if it
    /// yields no data.
    fn parse_reader(&self, reader: &mut dyn BufRead) -> Result<Blog>;
}
