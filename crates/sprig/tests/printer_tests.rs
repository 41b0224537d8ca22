//! Printer tests

use pretty_assertions::assert_eq;
use sprig::*;

fn round_trip(src: &str) -> String {
    let form = read_str(src).expect("read failed");
    print_form(&form, PrintOptions::readable())
}

#[test]
fn test_print_normalizes_whitespace() {
    assert_eq!(round_trip("(  +   1\n 2 )"), "(+ 1 2)");
    assert_eq!(round_trip("[ 1 , 2 ]"), "[1 2]");
    assert_eq!(round_trip("{ :a  1 }"), "{:a 1}");
}

#[test]
fn test_print_string_readably() {
    assert_eq!(round_trip(r#""a\nb""#), r#""a\nb""#);
    assert_eq!(round_trip(r#""q\"q""#), r#""q\"q""#);
    assert_eq!(round_trip(r#""back\\slash""#), r#""back\\slash""#);
}

#[test]
fn test_print_string_for_display() {
    let form = read_str(r#""a\nb""#).unwrap();
    assert_eq!(print_form(&form, PrintOptions::display()), "a\nb");
}

#[test]
fn test_printed_forms_read_back_equal() {
    let sources = [
        "(+ 1 2)",
        "[1 [2 [3]] ()]",
        r#"{"k" :v :n -5}"#,
        r#"("esc \\ \" \n" true false)"#,
        "(a :b \"c\" [d {:e f}])",
    ];
    for src in sources {
        let form = read_str(src).unwrap();
        let printed = print_form(&form, PrintOptions::readable());
        assert_eq!(read_str(&printed).unwrap(), form, "round trip of {}", src);
    }
}

#[test]
fn test_print_map_after_overwrite() {
    assert_eq!(round_trip("{:a 1 :b 2 :a 3}"), "{:a 3 :b 2}");
}

#[test]
fn test_print_keyword_and_string_keys() {
    assert_eq!(round_trip(r#"{"x" 1 :x 2}"#), r#"{"x" 1 :x 2}"#);
}
