//! COMMENT sections
//!
//! A comment starts with metadata lines (`AUTHOR:`, `EMAIL:`, `URL:`,
//! `DATE:`, `IP:`). The first line that is none of these starts the comment
//! text, which then runs verbatim up to the section separator.

use std::io::BufRead;

use chrono::{DateTime, Utc};

use super::date::parse_export_date;
use super::lines::LineSource;
use super::metadata::FieldContext;
use super::section::SECTION_SEPARATOR;
use crate::Result;
use crate::domain::{AuthorBuilder, PostComment};

#[derive(Default)]
struct CommentDraft {
    author: AuthorBuilder,
    published_on: Option<DateTime<Utc>>,
}

type CommentFieldHandler = fn(&mut CommentDraft, &str, &FieldContext) -> Result<()>;

static COMMENT_FIELDS: &[(&str, CommentFieldHandler)] = &[
    ("AUTHOR:", set_author_name),
    ("EMAIL:", set_author_email),
    ("URL:", set_author_url),
    ("DATE:", set_date),
    ("IP:", ignore),
];

/// Read a comment body up to and including the closing separator
pub(crate) fn read_comment<R: BufRead>(
    lines: &mut LineSource<R>,
    ctx: &FieldContext,
) -> Result<PostComment> {
    let mut draft = CommentDraft::default();
    let mut in_text = false;
    let mut text = String::new();

    loop {
        let line = lines.require_line()?;
        if line == SECTION_SEPARATOR {
            break;
        }

        if !in_text {
            if let Some((handler, value)) = match_field(&line) {
                handler(&mut draft, value, &ctx.at(lines.line()))?;
                continue;
            }
            in_text = true;
        }

        text.push_str(&line);
        text.push('\n');
    }

    Ok(PostComment {
        post_url: None,
        text,
        author: draft.author.build(),
        published_on: draft.published_on,
    })
}

fn match_field(line: &str) -> Option<(CommentFieldHandler, &str)> {
    COMMENT_FIELDS.iter().find_map(|(prefix, handler)| {
        line.strip_prefix(prefix)
            .map(|value| (*handler, value.trim()))
    })
}

fn set_author_name(draft: &mut CommentDraft, value: &str, _: &FieldContext) -> Result<()> {
    draft.author = std::mem::take(&mut draft.author).name(value);
    Ok(())
}

fn set_author_email(draft: &mut CommentDraft, value: &str, _: &FieldContext) -> Result<()> {
    draft.author = std::mem::take(&mut draft.author).email(value);
    Ok(())
}

fn set_author_url(draft: &mut CommentDraft, value: &str, _: &FieldContext) -> Result<()> {
    draft.author = std::mem::take(&mut draft.author).profile_url(value);
    Ok(())
}

fn set_date(draft: &mut CommentDraft, value: &str, ctx: &FieldContext) -> Result<()> {
    draft.published_on = Some(parse_export_date(value, ctx.line, ctx.offset)?);
    Ok(())
}

fn ignore(_: &mut CommentDraft, _: &str, _: &FieldContext) -> Result<()> {
    Ok(())
}
