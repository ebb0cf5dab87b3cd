//! Post metadata tests

use blog_parser::{
    Author, MovableTypeParser, Parser, ParserConfig, TagQuoteMode, parse_movable_type,
};
use chrono::Timelike;

fn single_post(export: &str) -> blog_parser::BlogPost {
    let mut blog = parse_movable_type(export).unwrap();
    assert_eq!(blog.posts.len(), 1);
    blog.posts.remove(0)
}

#[test]
fn test_tags() {
    let post = single_post("TAGS: a, b, c\n--------\n");
    assert_eq!(post.tags, vec!["a", "b", "c"]);
}

#[test]
fn test_tags_accumulate_with_duplicates() {
    let post = single_post("TAGS: a, b\nTAGS: b\n--------\n");
    assert_eq!(post.tags, vec!["a", "b", "b"]);
}

#[test]
fn test_empty_tag_tokens_are_kept() {
    let blog = parse_movable_type("TAGS: a,,b\n--------\nTAGS:\n--------\n").unwrap();
    assert_eq!(blog.posts[0].tags, vec!["a", "", "b"]);
    assert_eq!(blog.posts[1].tags, vec![""]);
}

#[test]
fn test_key_must_touch_colon() {
    let post = single_post("TITLE : spaced\n--------\n");
    assert_eq!(post.title, None);
}

#[test]
fn test_quoted_tag_keeps_literal_truncation() {
    // Regression pin: quoted tags lose their last character by default.
    let post = single_post("TAGS: \"web design\", css\n--------\n");
    assert_eq!(post.tags, vec!["web desig", "css"]);
}

#[test]
fn test_quoted_tag_strip_mode() {
    let config = ParserConfig {
        tag_quotes: TagQuoteMode::Strip,
        ..ParserConfig::default()
    };
    let blog = MovableTypeParser::new(config)
        .parse_str("TAGS: \"web design\", css\n--------\n")
        .unwrap();
    assert_eq!(blog.posts[0].tags, vec!["web design", "css"]);
}

#[test]
fn test_duplicate_categories_collapse() {
    let post = single_post("CATEGORY: News\nCATEGORY: News\n--------\n");
    assert_eq!(post.categories(), ["News"]);
}

#[test]
fn test_distinct_categories_keep_first_seen_order() {
    let post = single_post("CATEGORY: Zeta\nCATEGORY: Alpha\nCATEGORY: Zeta\n--------\n");
    assert_eq!(post.categories(), ["Zeta", "Alpha"]);
}

#[test]
fn test_primary_category_first() {
    let post = single_post("PRIMARY CATEGORY: Main\nCATEGORY: Main\nCATEGORY: Side\n--------\n");
    assert_eq!(post.categories(), ["Main", "Side"]);
}

#[test]
fn test_author_line_replaces_author() {
    let post = single_post("AUTHOR: one\nAUTHOR: two\n--------\n");
    assert_eq!(post.author, Some(Author::named("two")));
}

#[test]
fn test_dates() {
    let post = single_post("DATE: 06/15/2007 10:30:00 AM\n--------\n");
    assert_eq!(post.published_on.unwrap().hour(), 10);

    let post = single_post("DATE: 06/15/2007 10:30:00\n--------\n");
    assert_eq!(post.published_on.unwrap().hour(), 10);

    let post = single_post("DATE: 06/15/2007 14:30:00\n--------\n");
    assert_eq!(post.published_on.unwrap().hour(), 14);
}

#[test]
fn test_ignored_keys_have_no_effect() {
    let post = single_post(
        "\
BASENAME: slug
STATUS: Draft
ALLOW COMMENTS: 1
ALLOW PINGS: 1
NO ENTRY: 0
CONVERT BREAKS: markdown
SOMETHING ELSE: entirely
--------
",
    );
    assert!(post.is_blank());
}

#[test]
fn test_value_may_contain_colons() {
    let post = single_post("TITLE: Rust: a retrospective\n--------\n");
    assert_eq!(post.title.as_deref(), Some("Rust: a retrospective"));
}
