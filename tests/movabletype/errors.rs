//! Error reporting tests

use std::io::{self, BufRead, Read};

use blog_parser::{
    BlogParserError, MovableTypeParser, Parser, ParserConfig, parse_movable_type,
};

#[test]
fn test_empty_input() {
    let err = parse_movable_type("").unwrap_err();
    assert!(matches!(err, BlogParserError::InvalidInput(_)));
    assert_eq!(err.line(), None);
}

#[test]
fn test_empty_reader() {
    let mut reader = io::empty();
    let err = MovableTypeParser::default()
        .parse_reader(&mut reader)
        .unwrap_err();
    assert!(matches!(err, BlogParserError::InvalidInput(_)));
}

#[test]
fn test_unclosed_section_reports_last_line() {
    let export = "TITLE: t\n-----\nBODY:\nline one\nline two\n";
    let err = parse_movable_type(export).unwrap_err();
    assert!(matches!(err, BlogParserError::UnexpectedEndOfInput { line: 5 }));
    assert!(err.to_string().contains("line 5"));
}

#[test]
fn test_unclosed_comment_reports_last_line() {
    let export = "-----\nCOMMENT:\nAUTHOR: Ann\nhello\n\n";
    let err = parse_movable_type(export).unwrap_err();
    assert!(matches!(err, BlogParserError::UnexpectedEndOfInput { line: 5 }));
}

#[test]
fn test_separator_at_end_of_input() {
    let err = parse_movable_type("TITLE: t\n-----\n").unwrap_err();
    assert!(matches!(err, BlogParserError::UnexpectedEndOfInput { line: 2 }));
}

#[test]
fn test_unparseable_post_date() {
    let export = "TITLE: t\nDATE: 2007-06-15T10:30:00Z\n--------\n";
    let err = parse_movable_type(export).unwrap_err();
    match err {
        BlogParserError::UnparseableDate { token, line } => {
            assert_eq!(token, "2007-06-15T10:30:00Z");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unparseable_comment_date() {
    let export =
        "-----\nCOMMENT:\nAUTHOR: Ann\nDATE: 31/01/2002 03:15:20 PM\nhi\n-----\n--------\n";
    let err = parse_movable_type(export).unwrap_err();
    assert!(matches!(err, BlogParserError::UnparseableDate { line: 4, .. }));
}

#[test]
fn test_errors_discard_earlier_entries() {
    let export = "TITLE: fine\n--------\nDATE: soon\n--------\n";
    assert!(parse_movable_type(export).is_err());
}

#[test]
fn test_stray_line_rejected_in_strict_mode() {
    let parser = MovableTypeParser::new(ParserConfig::strict());
    let err = parser
        .parse_str("TITLE: t\n\nthis has no key\n--------\n")
        .unwrap_err();
    assert!(matches!(err, BlogParserError::UnrecognizedLine { line: 3, .. }));

    let blog = parse_movable_type("TITLE: t\n\nthis has no key\n--------\n").unwrap();
    assert_eq!(blog.posts[0].title.as_deref(), Some("t"));
}

/// Reader that fails after handing out its first chunk
struct FailingReader {
    data: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.data.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        Ok(self.data)
    }

    fn consume(&mut self, amt: usize) {
        self.data = &self.data[amt..];
    }
}

#[test]
fn test_io_error_carries_line() {
    let mut reader = FailingReader {
        data: b"TITLE: t\nTAGS: a\n",
    };
    let err = MovableTypeParser::default()
        .parse_reader(&mut reader)
        .unwrap_err();
    match err {
        BlogParserError::Io { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(source.to_string(), "disk on fire");
        }
        other => panic!("unexpected error: {other}"),
    }
}
