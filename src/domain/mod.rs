//! Blog domain model
//!
//! Format-neutral representation of an exported blog. Every format parser
//! populates these types.
//!
//! This module is organized into:
//! - `author`: Author and the incremental AuthorBuilder
//! - `blog`: the Blog aggregate owning posts, pages and authors
//! - `post`: BlogPost and BlogPage
//! - `comment`: PostComment

mod author;
mod blog;
mod comment;
mod post;

pub use self::author::{Author, AuthorBuilder};
pub use self::blog::Blog;
pub use self::comment::PostComment;
pub use self::post::{BlogPage, BlogPost};

use crate::{BlogParserError, Result};

/// Set a url slot that may only be written once
fn set_url_once(slot: &mut Option<String>, url: String) -> Result<()> {
    match slot {
        Some(current) => Err(BlogParserError::UrlAlreadySet {
            current: current.clone(),
        }),
        None => {
            *slot = Some(url);
            Ok(())
        }
    }
}
