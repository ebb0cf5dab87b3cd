//! Line-numbered input source

use std::io::BufRead;

use crate::{BlogParserError, Result};

/// Forward-only reader yielding trimmed lines and counting them
///
/// The count is 1-based and names the most recently returned line; it does
/// not advance at end of input, so errors raised there still point at the
/// last real line.
pub(crate) struct LineSource<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> LineSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of the last line returned, 0 before the first
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Read the next line with surrounding whitespace stripped
    ///
    /// Returns `Ok(None)` at end of input.
    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let read = self
            .reader
            .read_line(&mut self.buf)
            .map_err(|source| BlogParserError::Io {
                line: self.line + 1,
                source,
            })?;

        if read == 0 {
            return Ok(None);
        }

        self.line += 1;
        Ok(Some(self.buf.trim().to_string()))
    }

    /// Read the next line, treating end of input as an error
    pub(crate) fn require_line(&mut self) -> Result<String> {
        self.next_line()?
            .ok_or(BlogParserError::UnexpectedEndOfInput { line: self.line })
    }
}
