//! MovableType export format
//!
//! Reference: <https://www.movabletype.org/documentation/appendices/import-export-format.html>
//!
//! A MovableType export is plain text. Each entry is a run of `KEY: value`
//! metadata lines followed by named sections, terminated by an eight-hyphen
//! line:
//!
//! ```text
//! AUTHOR: sangupta
//! TITLE: Hello World
//! DATE: 06/15/2007 10:30:00 AM
//! CATEGORY: News
//! -----
//! BODY:
//! First post.
//! -----
//! COMMENT:
//! AUTHOR: Ann
//! EMAIL: ann@example.com
//! Welcome!
//! -----
//! --------
//! ```
//!
//! This module is organized into:
//! - `lines`: line-numbered input source
//! - `date`: the two export date patterns
//! - `metadata`: post metadata dispatch table
//! - `section`: section reader (BODY, EXTENDED BODY, EXCERPT, PING)
//! - `comment`: COMMENT section parser
//! - `parsing`: the export-level state machine

mod comment;
mod date;
mod lines;
mod metadata;
mod parsing;
mod section;

use std::io::BufRead;

use crate::config::ParserConfig;
use crate::domain::Blog;
use crate::parser::Parser;
use crate::{BlogParserError, Result};

pub use self::parsing::ENTRY_SEPARATOR;
pub use self::section::SECTION_SEPARATOR;

/// Parser for MovableType text exports
///
/// The parser only holds its configuration. Each call reads its input with
/// fresh state, so one parser can be shared across threads.
///
/// Content after the last entry separator is not captured: an export whose
/// final entry lacks a trailing `--------` line loses that entry.
///
/// # Examples
///
/// ```
/// use blog_parser::{MovableTypeParser, Parser, ParserConfig};
///
/// let export = "\
/// TITLE: Hello
/// TAGS: rust, parsing
/// -----
/// BODY:
/// Hi there.
/// -----
/// --------
/// ";
///
/// let parser = MovableTypeParser::new(ParserConfig::default());
/// let blog = parser.parse_str(export).unwrap();
///
/// assert_eq!(blog.posts.len(), 1);
/// assert_eq!(blog.posts[0].title.as_deref(), Some("Hello"));
/// assert_eq!(blog.posts[0].tags, vec!["rust", "parsing"]);
/// assert_eq!(blog.posts[0].content.as_deref(), Some("Hi there.\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MovableTypeParser {
    config: ParserConfig,
}

impl MovableTypeParser {
    /// Create a parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser applies
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl Parser for MovableTypeParser {
    fn parse_str(&self, data: &str) -> Result<Blog> {
        if data.is_empty() {
            return Err(BlogParserError::InvalidInput(
                "Blog data cannot be empty".to_string(),
            ));
        }
        parsing::parse_export(data.as_bytes(), &self.config)
    }

    fn parse_reader(&self, reader: &mut dyn BufRead) -> Result<Blog> {
        parsing::parse_export(reader, &self.config)
    }
}

/// Parse a MovableType export with the default configuration
///
/// # Examples
///
/// ```
/// use blog_parser::parse_movable_type;
///
/// let blog = parse_movable_type("TITLE: One\n--------\nTITLE: Two\n--------\n").unwrap();
/// assert_eq!(blog.posts.len(), 2);
///
/// assert!(parse_movable_type("").is_err());
/// ```
pub fn parse_movable_type(data: &str) -> Result<Blog> {
    MovableTypeParser::default().parse_str(data)
}
