//! Reader tests

use pretty_assertions::assert_eq;
use sprig::*;

fn read(src: &str) -> Form {
    read_str(src).expect("read failed")
}

// ═══════════════════════════════════════════════════════════════════════
// Atoms
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_integers() {
    assert_eq!(read("1"), Form::int(1));
    assert_eq!(read("-123"), Form::int(-123));
    assert_eq!(read("  7 "), Form::int(7));
}

#[test]
fn test_read_integer_out_of_range() {
    assert_eq!(
        read_str("99999999999999999999"),
        Err(ReadError::IntegerOutOfRange {
            token: "99999999999999999999".to_string()
        })
    );
}

#[test]
fn test_read_symbols() {
    assert_eq!(read("+"), Form::symbol("+"));
    assert_eq!(read("abc-def"), Form::symbol("abc-def"));
    assert_eq!(read("-"), Form::symbol("-"));
    assert_eq!(read("-abc"), Form::symbol("-abc"));
    assert_eq!(read("1abc"), Form::symbol("1abc"));
}

#[test]
fn test_read_booleans_are_singletons() {
    assert_eq!(read("true"), Form::TRUE);
    assert_eq!(read("false"), Form::FALSE);
    assert_eq!(read("true").token(), None);
    assert_eq!(read("truthy"), Form::symbol("truthy"));
}

#[test]
fn test_read_keywords_are_interned() {
    let form = read(":kw");
    let keyword = form.as_keyword().expect("keyword");
    assert!(keyword.ptr_eq(&Keyword::intern("kw")));
    assert_eq!(keyword.name(), "kw");
}

#[test]
fn test_read_strings() {
    assert_eq!(read(r#""abc""#), Form::string("abc"));
    assert_eq!(read(r#""""#), Form::string(""));
    assert_eq!(read(r#""a\nb""#), Form::string("a\nb"));
    assert_eq!(read(r#""a\"b""#), Form::string("a\"b"));
    assert_eq!(read(r#""a\\b""#), Form::string("a\\b"));
    assert_eq!(read(r#""(1 2)""#), Form::string("(1 2)"));
}

#[test]
fn test_read_unbalanced_string() {
    assert_eq!(
        read_str(r#""abc"#),
        Err(ReadError::UnbalancedString { offset: 0 })
    );
    assert_eq!(
        read_str(r#"(x "abc\")"#),
        Err(ReadError::UnbalancedString { offset: 3 })
    );
}

#[test]
fn test_read_unknown_escape() {
    assert_eq!(
        read_str(r#""tab\there""#),
        Err(ReadError::UnrecognizedEscape { escape: 't' })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Collections
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_list() {
    assert_eq!(
        read("(+ 1 2)"),
        Form::list(vec![Form::symbol("+"), Form::int(1), Form::int(2)])
    );
    assert_eq!(read("()"), Form::list(vec![]));
    assert_eq!(read("( + 2 (* 3 4) )").to_string(), "(+ 2 (* 3 4))");
}

#[test]
fn test_read_vector() {
    assert_eq!(
        read("[1 2 3]"),
        Form::vector(vec![Form::int(1), Form::int(2), Form::int(3)])
    );
    assert_eq!(read("[]"), Form::vector(vec![]));
}

#[test]
fn test_read_hash_map() {
    let form = read("{:a 1}");
    let map = form.as_map().expect("map");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&Form::from(Keyword::intern("a"))), Some(&Form::int(1)));
}

#[test]
fn test_read_nested() {
    let form = read(r#"{"v" [1 (2 {:x 3})]}"#);
    assert_eq!(form.to_string(), "{v [1 (2 {:x 3})]}");
}

#[test]
fn test_read_commas_are_whitespace() {
    assert_eq!(read("[1,2, 3,,]"), read("[1 2 3]"));
}

#[test]
fn test_read_hash_map_invalid_key() {
    assert!(matches!(
        read_str("{1 2}"),
        Err(ReadError::InvalidKey { .. })
    ));
    assert!(matches!(
        read_str("{:a 1 sym 2}"),
        Err(ReadError::InvalidKey { .. })
    ));
}

#[test]
fn test_read_hash_map_odd_members() {
    assert!(matches!(
        read_str("{:a 1 :b}"),
        Err(ReadError::UnpairedMapKey { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Delimiter Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_closer() {
    assert_eq!(
        read_str("(1 2"),
        Err(ReadError::MismatchedDelimiter {
            expected: ")",
            found: None,
        })
    );
    assert_eq!(
        read_str("[1 (2 3)"),
        Err(ReadError::MismatchedDelimiter {
            expected: "]",
            found: None,
        })
    );
    assert_eq!(
        read_str("{:a 1"),
        Err(ReadError::MismatchedDelimiter {
            expected: "}",
            found: None,
        })
    );
}

#[test]
fn test_wrong_closer() {
    let err = read_str("(1 2]").unwrap_err();
    assert_eq!(
        err,
        ReadError::MismatchedDelimiter {
            expected: ")",
            found: Some(Token::new("]", 4)),
        }
    );
    assert_eq!(err.to_string(), "expected ')', got ']' at offset 4");
    assert_eq!(
        read_str("[{:a 1)]").unwrap_err().to_string(),
        "expected '}', got ')' at offset 6"
    );
}

#[test]
fn test_stray_closer() {
    assert_eq!(
        read_str(")"),
        Err(ReadError::UnexpectedDelimiter {
            token: ")".to_string(),
            offset: 0
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Comments, Empty and Trailing Input
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_comments_are_skipped() {
    assert_eq!(read("; leading\n42 ; trailing"), Form::int(42));
    assert_eq!(
        read("(1 ; inside\n 2)"),
        Form::list(vec![Form::int(1), Form::int(2)])
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(read_str(""), Err(ReadError::EmptyInput));
    assert_eq!(read_str("   "), Err(ReadError::EmptyInput));
    assert_eq!(read_str(";; just a comment"), Err(ReadError::EmptyInput));
}

#[test]
fn test_trailing_input() {
    assert_eq!(
        read_str("1 2"),
        Err(ReadError::TrailingInput {
            token: "2".to_string(),
            offset: 2
        })
    );
    assert!(matches!(
        read_str("(a) )"),
        Err(ReadError::TrailingInput { .. })
    ));
}

#[test]
fn test_reader_macros_read_as_symbols() {
    assert_eq!(
        read("(~@ x)"),
        Form::list(vec![Form::symbol("~@"), Form::symbol("x")])
    );
}
