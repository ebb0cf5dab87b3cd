//! Blog posts and static pages

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use super::{Author, PostComment, set_url_once};
use crate::Result;

/// One entry of the blog
///
/// Identity is the post's url: two posts are equal when their urls are
/// equal, whatever their other fields hold. Posts without a url compare
/// equal to each other.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlogPost {
    /// Title of the post
    pub title: Option<String>,
    /// Absolute url, immutable once set
    url: Option<String>,
    /// Post content, may embed literal newlines
    pub content: Option<String>,
    /// When the post was published
    pub published_on: Option<DateTime<Utc>>,
    /// Author of the post
    pub author: Option<Author>,
    /// Comments in export order
    pub comments: Vec<PostComment>,
    /// Tags in export order; repeats are kept
    pub tags: Vec<String>,
    /// Categories in first-seen order, without duplicates
    categories: Vec<String>,
}

impl BlogPost {
    /// Create an empty post
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty post with its url already set
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Absolute url of the post, if known
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Set the url
    ///
    /// Fails with `UrlAlreadySet` if the post already has one.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        set_url_once(&mut self.url, url.into())
    }

    /// Categories in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Add a category unless an identical one is already present
    ///
    /// Returns `true` if the category was added.
    pub fn add_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if self.categories.contains(&category) {
            return false;
        }
        self.categories.push(category);
        true
    }

    /// Add a tag; repeats are kept
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Add a comment
    pub fn add_comment(&mut self, comment: PostComment) {
        self.comments.push(comment);
    }

    /// Check whether nothing has been recorded on this post yet
    pub fn is_blank(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.content.is_none()
            && self.published_on.is_none()
            && self.author.is_none()
            && self.comments.is_empty()
            && self.tags.is_empty()
            && self.categories.is_empty()
    }
}

impl PartialEq for BlogPost {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for BlogPost {}

impl Hash for BlogPost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

/// A static page of the blog
///
/// Pages have no comments, tags or categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlogPage {
    /// Title of the page
    pub title: Option<String>,
    url: Option<String>,
    /// Page content
    pub content: Option<String>,
    /// When the page was published
    pub published_on: Option<DateTime<Utc>>,
    /// Author of the page
    pub author: Option<Author>,
}

impl BlogPage {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute url of the page, if known
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Set the url
    ///
    /// Fails with `UrlAlreadySet` if the page already has one.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        set_url_once(&mut self.url, url.into())
    }
}
