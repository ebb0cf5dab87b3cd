//! COMMENT section tests

use blog_parser::{Author, parse_movable_type};
use chrono::{TimeZone, Utc};

fn comments_of(export: &str) -> Vec<blog_parser::PostComment> {
    let mut blog = parse_movable_type(export).unwrap();
    assert_eq!(blog.posts.len(), 1);
    blog.posts.remove(0).comments
}

#[test]
fn test_author_email_and_two_text_lines() {
    let comments = comments_of(
        "\
TITLE: post
-----
COMMENT:
AUTHOR: Ann
EMAIL: ann@example.com
First free-text line.
Second free-text line.
-----
--------
",
    );

    assert_eq!(comments.len(), 1);
    let comment = &comments[0];
    assert_eq!(comment.text, "First free-text line.\nSecond free-text line.\n");

    let author = comment.author.as_ref().unwrap();
    assert_eq!(author.name.as_deref(), Some("Ann"));
    assert_eq!(author.email.as_deref(), Some("ann@example.com"));
    assert_eq!(author.profile_url, None);
}

#[test]
fn test_all_comment_metadata() {
    let comments = comments_of(
        "\
-----
COMMENT:
AUTHOR: Ann
EMAIL: ann@example.com
IP: 127.0.0.1
URL: http://ann.example.com/
DATE: 01/31/2002 03:15:20 PM
Text.
-----
--------
",
    );

    let comment = &comments[0];
    assert_eq!(
        comment.author,
        Some(Author {
            name: Some("Ann".to_string()),
            email: Some("ann@example.com".to_string()),
            profile_url: Some("http://ann.example.com/".to_string()),
        })
    );
    assert_eq!(
        comment.published_on,
        Some(Utc.with_ymd_and_hms(2002, 1, 31, 15, 15, 20).unwrap())
    );
    assert_eq!(comment.text, "Text.\n");
}

#[test]
fn test_text_phase_is_permanent() {
    let comments = comments_of(
        "\
-----
COMMENT:
AUTHOR: Ann
Looks like metadata below:
AUTHOR: Mallory
DATE: not a date at all
-----
--------
",
    );

    let comment = &comments[0];
    assert_eq!(
        comment.text,
        "Looks like metadata below:\nAUTHOR: Mallory\nDATE: not a date at all\n"
    );
    assert_eq!(comment.author, Some(Author::named("Ann")));
    assert_eq!(comment.published_on, None);
}

#[test]
fn test_multiple_comments_keep_order() {
    let comments = comments_of(
        "\
-----
COMMENT:
AUTHOR: first
one
-----
COMMENT:
AUTHOR: second
two
-----

COMMENT:
AUTHOR: third
three
-----
--------
",
    );

    let names: Vec<_> = comments
        .iter()
        .map(|c| c.author.as_ref().unwrap().name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert_eq!(comments[2].text, "three\n");
}

#[test]
fn test_comment_does_not_touch_post_fields() {
    let blog = parse_movable_type(
        "\
AUTHOR: owner
-----
COMMENT:
AUTHOR: visitor
DATE: 01/01/2010 00:00:00
hi
-----
--------
",
    )
    .unwrap();

    let post = &blog.posts[0];
    assert_eq!(post.author, Some(Author::named("owner")));
    assert_eq!(post.published_on, None);
}
