//! Comments on posts

use chrono::{DateTime, Utc};

use super::Author;

/// A comment left on a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PostComment {
    /// Url of the commented post, for formats that link comments out of band
    pub post_url: Option<String>,
    /// Comment text
    pub text: String,
    /// Who wrote the comment
    pub author: Option<Author>,
    /// When the comment was published
    pub published_on: Option<DateTime<Utc>>,
}

impl PostComment {
    /// Create an empty comment
    pub fn new() -> Self {
        Self::default()
    }
}
