//! The blog aggregate

use std::hash::{Hash, Hasher};

use super::{Author, BlogPage, BlogPost, set_url_once};
use crate::Result;

/// An entire exported blog
///
/// The blog exclusively owns its posts, pages and authors. Identity is the
/// blog's url.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blog {
    /// Title of the blog
    pub title: Option<String>,
    url: Option<String>,
    /// Tagline or description
    pub description: Option<String>,
    /// Posts in export order
    pub posts: Vec<BlogPost>,
    /// Static pages in export order
    pub pages: Vec<BlogPage>,
    authors: Vec<Author>,
}

impl Blog {
    /// Create an empty blog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty blog with its url already set
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Absolute url of the blog, if known
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Set the url
    ///
    /// Fails with `UrlAlreadySet` if the blog already has one.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        set_url_once(&mut self.url, url.into())
    }

    /// Append a post
    pub fn add_post(&mut self, post: BlogPost) {
        self.posts.push(post);
    }

    /// Append a page
    pub fn add_page(&mut self, page: BlogPage) {
        self.pages.push(page);
    }

    /// Authors in the order they were first added
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Add an author unless an equal one is already present
    ///
    /// Returns `true` if the author was added.
    pub fn add_author(&mut self, author: Author) -> bool {
        if self.authors.contains(&author) {
            return false;
        }
        self.authors.push(author);
        true
    }
}

impl PartialEq for Blog {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Blog {}

impl Hash for Blog {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}
