//! Named multi-line sections
//!
//! A section starts after a `-----` separator with a `NAME:` line and runs
//! until the next separator. `COMMENT` sections carry their own metadata and
//! are handed to the comment parser.

use std::io::BufRead;

use tracing::trace;

use super::comment::read_comment;
use super::lines::LineSource;
use super::metadata::FieldContext;
use crate::domain::BlogPost;
use crate::{BlogParserError, Result};

/// Marker line opening and closing a section
pub const SECTION_SEPARATOR: &str = "-----";

const COMMENT_SECTION: &str = "COMMENT";

type SectionHandler = fn(&mut BlogPost, String);

static SECTIONS: &[(&str, SectionHandler)] = &[
    ("BODY", set_body),
    ("EXTENDED BODY", append_extended_body),
    ("EXCERPT", discard),
    ("PING", discard),
];

/// Read one section and apply it to `post`
///
/// `name_line` is the already-consumed `NAME:` line when the section was
/// opened without a separator; otherwise the name is read from `lines`.
pub(crate) fn read_section<R: BufRead>(
    lines: &mut LineSource<R>,
    post: &mut BlogPost,
    name_line: Option<String>,
    ctx: &FieldContext,
) -> Result<()> {
    let name_line = match name_line {
        Some(line) => line,
        None => lines.require_line()?,
    };

    let Some(name) = name_line.strip_suffix(':') else {
        return Err(BlogParserError::MalformedSection {
            line: lines.line(),
            found: name_line,
        });
    };

    if name == COMMENT_SECTION {
        let comment = read_comment(lines, ctx)?;
        trace!(line = lines.line(), "comment section closed");
        post.add_comment(comment);
        return Ok(());
    }

    let text = read_section_text(lines)?;
    trace!(line = lines.line(), section = name, "section closed");

    match SECTIONS.iter().find(|(section, _)| *section == name) {
        Some((_, handler)) => handler(post, text),
        None => trace!(section = name, "skipping unknown section"),
    }

    Ok(())
}

/// Collect section lines up to the closing separator
///
/// Every line, blank ones included, ends up newline-terminated.
fn read_section_text<R: BufRead>(lines: &mut LineSource<R>) -> Result<String> {
    let mut text = String::new();
    loop {
        let line = lines.require_line()?;
        if line == SECTION_SEPARATOR {
            return Ok(text);
        }
        text.push_str(&line);
        text.push('\n');
    }
}

fn set_body(post: &mut BlogPost, text: String) {
    post.content = Some(text);
}

/// Append to the body, adding a newline only if the body lacks a trailing one
///
/// BODY `Intro` plus EXTENDED BODY `More` reads `"Intro\nMore\n"`, not the
/// doubled newline an unconditional join would give.
fn append_extended_body(post: &mut BlogPost, text: String) {
    let mut content = post.content.take().unwrap_or_default();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&text);
    post.content = Some(content);
}

fn discard(_: &mut BlogPost, _: String) {}
