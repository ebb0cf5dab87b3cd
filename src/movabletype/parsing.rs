//! Export-level parsing loop
//!
//! Drives a [`LineSource`] through the entry/section state machine and
//! collects finished posts into a [`Blog`].

use std::io::BufRead;

use tracing::{debug, warn};

use super::lines::LineSource;
use super::metadata::{FieldContext, apply_post_metadata, split_metadata};
use super::section::{SECTION_SEPARATOR, read_section};
use crate::config::{ParserConfig, StrayLinePolicy};
use crate::domain::{Blog, BlogPost};
use crate::{BlogParserError, Result};

/// Marker line terminating an entry
pub const ENTRY_SEPARATOR: &str = "--------";

/// Where the parse loop stands between lines
enum State {
    /// Expecting metadata, an entry separator or a section separator
    Scanning,
    /// Like `Scanning`, but a section has just closed, so a `NAME:` line
    /// opens the next section without a separator
    SectionClosed,
    /// Consuming a section; holds its name line if already read
    InSection(Option<String>),
    /// Input exhausted
    Done,
}

/// Everything a single parse needs; built fresh per call
struct ExportParse<'a, R> {
    lines: LineSource<R>,
    config: &'a ParserConfig,
    ctx: FieldContext,
    blog: Blog,
    post: BlogPost,
}

/// Parse a complete MovableType export
///
/// Fails with `InvalidInput` if the reader yields no data at all.
pub(crate) fn parse_export<R: BufRead>(mut reader: R, config: &ParserConfig) -> Result<Blog> {
    let offset = config.utc_offset()?;

    let has_data = !reader
        .fill_buf()
        .map_err(|source| BlogParserError::Io { line: 1, source })?
        .is_empty();
    if !has_data {
        return Err(BlogParserError::InvalidInput(
            "Blog export cannot be empty".to_string(),
        ));
    }

    let parse = ExportParse {
        lines: LineSource::new(reader),
        config,
        ctx: FieldContext {
            line: 0,
            offset,
            tag_quotes: config.tag_quotes,
        },
        blog: Blog::new(),
        post: BlogPost::new(),
    };
    parse.run()
}

impl<R: BufRead> ExportParse<'_, R> {
    fn run(mut self) -> Result<Blog> {
        debug!("parsing MovableType export");

        let mut state = State::Scanning;
        loop {
            state = match state {
                State::Scanning => self.scan(false)?,
                State::SectionClosed => self.scan(true)?,
                State::InSection(name_line) => {
                    read_section(&mut self.lines, &mut self.post, name_line, &self.ctx)?;
                    State::SectionClosed
                }
                State::Done => break,
            };
        }

        if !self.post.is_blank() {
            debug!(
                line = self.lines.line(),
                "dropping trailing entry without a separator"
            );
        }

        debug!(
            posts = self.blog.posts.len(),
            lines = self.lines.line(),
            "finished MovableType export"
        );
        Ok(self.blog)
    }

    /// Handle one line outside any section
    fn scan(&mut self, after_section: bool) -> Result<State> {
        let Some(line) = self.lines.next_line()? else {
            return Ok(State::Done);
        };

        if line.is_empty() {
            return Ok(if after_section {
                State::SectionClosed
            } else {
                State::Scanning
            });
        }

        if after_section && line.ends_with(':') {
            return Ok(State::InSection(Some(line)));
        }

        if line == ENTRY_SEPARATOR {
            let post = std::mem::take(&mut self.post);
            debug!(line = self.lines.line(), title = ?post.title, "entry finished");
            self.blog.add_post(post);
            return Ok(State::Scanning);
        }

        if line == SECTION_SEPARATOR {
            return Ok(State::InSection(None));
        }

        match split_metadata(&line) {
            Some((key, value)) => {
                let ctx = self.ctx.at(self.lines.line());
                apply_post_metadata(&mut self.post, key, value, &ctx)?;
            }
            None => self.stray_line(&line)?,
        }

        Ok(State::Scanning)
    }

    fn stray_line(&self, content: &str) -> Result<()> {
        match self.config.stray_lines {
            StrayLinePolicy::Ignore => {
                warn!(line = self.lines.line(), content, "ignoring line without a key");
                Ok(())
            }
            StrayLinePolicy::Reject => Err(BlogParserError::UnrecognizedLine {
                line: self.lines.line(),
                content: content.to_string(),
            }),
        }
    }
}
