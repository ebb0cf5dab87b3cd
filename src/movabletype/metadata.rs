//! Post metadata lines
//!
//! Outside sections, an entry is a list of `KEY: value` lines. Each known key
//! maps to a handler in [`POST_FIELDS`]; keys the importer deliberately skips
//! are listed with a no-op handler so the table documents the whole format.

use chrono::FixedOffset;
use tracing::trace;

use super::date::parse_export_date;
use crate::Result;
use crate::config::TagQuoteMode;
use crate::domain::{Author, BlogPost};

/// Per-line context handed to field handlers
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldContext {
    /// Line the value was read from
    pub(crate) line: usize,
    /// Offset export dates are written in
    pub(crate) offset: FixedOffset,
    /// How quoted `TAGS` tokens are unquoted
    pub(crate) tag_quotes: TagQuoteMode,
}

impl FieldContext {
    /// Same settings, pointing at another line
    pub(crate) fn at(&self, line: usize) -> Self {
        Self { line, ..*self }
    }
}

type PostFieldHandler = fn(&mut BlogPost, &str, &FieldContext) -> Result<()>;

static POST_FIELDS: &[(&str, PostFieldHandler)] = &[
    ("AUTHOR", set_author),
    ("TITLE", set_title),
    ("DATE", set_date),
    ("PRIMARY CATEGORY", add_primary_category),
    ("CATEGORY", add_category),
    ("TAGS", add_tags),
    ("BASENAME", ignore),
    ("STATUS", ignore),
    ("ALLOW COMMENTS", ignore),
    ("ALLOW PINGS", ignore),
    ("NO ENTRY", ignore),
    ("CONVERT BREAKS", ignore),
];

/// Split a metadata line at its first colon
///
/// Returns the key as written and the trimmed value, or `None` if the line
/// has no colon.
pub(crate) fn split_metadata(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').map(|(key, value)| (key, value.trim()))
}

/// Apply one metadata value to the post under construction
///
/// Unknown keys are skipped.
pub(crate) fn apply_post_metadata(
    post: &mut BlogPost,
    key: &str,
    value: &str,
    ctx: &FieldContext,
) -> Result<()> {
    match POST_FIELDS.iter().find(|(name, _)| *name == key) {
        Some((_, handler)) => handler(post, value, ctx),
        None => {
            trace!(line = ctx.line, key, "skipping unknown metadata key");
            Ok(())
        }
    }
}

fn set_author(post: &mut BlogPost, value: &str, _: &FieldContext) -> Result<()> {
    post.author = Some(Author::named(value));
    Ok(())
}

fn set_title(post: &mut BlogPost, value: &str, _: &FieldContext) -> Result<()> {
    post.title = Some(value.to_string());
    Ok(())
}

fn set_date(post: &mut BlogPost, value: &str, ctx: &FieldContext) -> Result<()> {
    post.published_on = Some(parse_export_date(value, ctx.line, ctx.offset)?);
    Ok(())
}

fn add_primary_category(post: &mut BlogPost, value: &str, _: &FieldContext) -> Result<()> {
    post.add_category(value);
    Ok(())
}

fn add_category(post: &mut BlogPost, value: &str, _: &FieldContext) -> Result<()> {
    if !post.add_category(value) {
        trace!(category = value, "category already present");
    }
    Ok(())
}

fn add_tags(post: &mut BlogPost, value: &str, ctx: &FieldContext) -> Result<()> {
    for tag in parse_tags(value, ctx.tag_quotes) {
        post.add_tag(tag);
    }
    Ok(())
}

fn ignore(_: &mut BlogPost, _: &str, _: &FieldContext) -> Result<()> {
    Ok(())
}

/// Split a `TAGS` value into individual tags
///
/// Tokens are comma separated and trimmed. Empty tokens are kept, so a bare
/// `TAGS:` line yields one empty tag.
pub(crate) fn parse_tags(value: &str, mode: TagQuoteMode) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .map(|token| unquote_tag(token, mode).to_string())
        .collect()
}

fn unquote_tag(token: &str, mode: TagQuoteMode) -> &str {
    if !(token.starts_with('"') && token.ends_with('"')) {
        return token;
    }

    // The opening quote is one byte, so slicing after it is always valid.
    let inner = &token[1..];
    let mut chars = inner.chars();
    match mode {
        TagQuoteMode::Literal => {
            chars.next_back();
            chars.next_back();
        }
        TagQuoteMode::Strip => {
            chars.next_back();
        }
    }
    chars.as_str().trim()
}
