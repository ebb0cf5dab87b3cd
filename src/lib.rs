#![doc = include_str!("../README.md")]

mod config;
/// Blog domain model shared by all export formats
pub mod domain;
mod error;
/// MovableType text export parser
pub mod movabletype;
mod parser;

pub use config::{ParserConfig, StrayLinePolicy, TagQuoteMode};
pub use domain::{Author, AuthorBuilder, Blog, BlogPage, BlogPost, PostComment};
pub use error::{BlogParserError, Result};
pub use movabletype::{MovableTypeParser, parse_movable_type};
pub use parser::Parser;
