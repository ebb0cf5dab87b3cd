//! Post, page and comment authors

/// An author in the blog model: a post author, blog author or comment author
///
/// All fields are optional since export formats carry different subsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    /// Display name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Absolute URL of the author's profile
    pub profile_url: Option<String>,
}

impl Author {
    /// Create an author that only has a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Incremental builder for an [`Author`]
///
/// Used where author fields arrive one line at a time. Later calls for the
/// same field overwrite earlier ones.
///
/// # Examples
///
/// ```
/// use blog_parser::AuthorBuilder;
///
/// let author = AuthorBuilder::new()
///     .name("Jane")
///     .email("jane@example.com")
///     .build()
///     .unwrap();
/// assert_eq!(author.name.as_deref(), Some("Jane"));
/// assert_eq!(author.profile_url, None);
///
/// // Nothing collected, nothing built
/// assert!(AuthorBuilder::new().build().is_none());
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct AuthorBuilder {
    name: Option<String>,
    email: Option<String>,
    profile_url: Option<String>,
}

impl AuthorBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author's name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the author's email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the author's profile url
    pub fn profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = Some(url.into());
        self
    }

    /// Check whether no field has been set yet
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.profile_url.is_none()
    }

    /// Freeze the collected fields into an [`Author`]
    ///
    /// Returns `None` if no field was ever set.
    pub fn build(self) -> Option<Author> {
        if self.is_empty() {
            return None;
        }

        Some(Author {
            name: self.name,
            email: self.email,
            profile_url: self.profile_url,
        })
    }
}
