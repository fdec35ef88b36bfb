use filterlang_syntax::parse;

use crate::backend::{CompletionRequest, What};
use crate::context::{CompletionContext, Expected, classify};

/// Classifies `doc`, where `|` marks the cursor.
fn ctx(doc: &str) -> Option<CompletionContext> {
    let cursor = doc.find('|').expect("test input needs a cursor marker");
    let text = doc.replacen('|', "", 1);
    classify(&parse(&text), cursor)
}

fn describe(doc: &str) -> String {
    match ctx(doc) {
        None => "none".to_string(),
        Some(c) => format!("{:?} prefix={:?} {}..{}", c.expected, c.prefix, c.from, c.to),
    }
}

#[test]
fn column_at_start() {
    insta::assert_snapshot!(describe("|"), @"Column { offer_not: true } prefix=None 0..0");
    insta::assert_snapshot!(describe("S|"), @r#"Column { offer_not: false } prefix=Some("S") 0..1"#);
    insta::assert_snapshot!(describe("N|"), @r#"Column { offer_not: true } prefix=Some("N") 0..1"#);
}

#[test]
fn prefix_spans_the_whole_word() {
    insta::assert_snapshot!(describe("S|rc ="), @r#"Column { offer_not: false } prefix=Some("Src") 0..3"#);
}

#[test]
fn not_keyword_matches_case_insensitively() {
    insta::assert_snapshot!(describe("not|"), @r#"Column { offer_not: true } prefix=Some("not") 0..3"#);
}

#[test]
fn column_after_connectives_and_groups() {
    insta::assert_snapshot!(describe("SrcAS = 100 AND |"), @"Column { offer_not: true } prefix=None 16..16");
    insta::assert_snapshot!(describe("SrcAS = 100 AND S|"), @r#"Column { offer_not: false } prefix=Some("S") 16..17"#);
    insta::assert_snapshot!(describe("(|"), @"Column { offer_not: true } prefix=None 1..1");
}

#[test]
fn no_second_not_after_not() {
    insta::assert_snapshot!(describe("NOT |"), @"Column { offer_not: false } prefix=None 4..4");
}

#[test]
fn operator_after_column() {
    insta::assert_snapshot!(describe("SrcAS |"), @r#"Operator { column: "SrcAS" } prefix=None 6..6"#);
    insta::assert_snapshot!(describe("SrcAS I|"), @r#"Operator { column: "SrcAS" } prefix=Some("I") 6..7"#);
}

#[test]
fn value_after_operator() {
    insta::assert_snapshot!(describe("SrcAS = |"), @r#"Value { column: "SrcAS", list: None } prefix=None 8..8"#);
    insta::assert_snapshot!(describe("SrcAS = fac|"), @r#"Value { column: "SrcAS", list: None } prefix=Some("fac") 8..11"#);
}

#[test]
fn quoted_values() {
    insta::assert_snapshot!(describe(r#"DstNetName = "so|"#), @r#"Value { column: "DstNetName", list: None } prefix=Some("so") 13..16"#);
    insta::assert_snapshot!(describe(r#"DstNetName = "|"#), @r#"Value { column: "DstNetName", list: None } prefix=None 13..14"#);
    insta::assert_snapshot!(describe(r#"DstNetName = "s|o""#), @r#"Value { column: "DstNetName", list: None } prefix=Some("so") 13..17"#);
}

#[test]
fn escaped_quote_in_prefix_is_resolved() {
    insta::assert_snapshot!(describe(r#"SrcAS = "a\"b|"#), @r#"Value { column: "SrcAS", list: None } prefix=Some("a\"b") 8..13"#);
    insta::assert_snapshot!(describe(r#"SrcAS = "a\\|"#), @r#"Value { column: "SrcAS", list: None } prefix=Some("a\\") 8..12"#);
}

#[test]
fn nothing_after_closed_string() {
    insta::assert_snapshot!(describe(r#"DstNetName = "so"|"#), @"none");
}

#[test]
fn strings_outside_value_position() {
    insta::assert_snapshot!(describe(r#"SrcAS "x|"#), @"none");
}

#[test]
fn connective_after_complete_clause() {
    insta::assert_snapshot!(describe("SrcAS = 1000 |"), @"Connective prefix=None 13..13");
    insta::assert_snapshot!(describe("SrcAS = 1000 A|"), @r#"Connective prefix=Some("A") 13..14"#);
    insta::assert_snapshot!(describe("SrcAS = 100 AND|"), @r#"Connective prefix=Some("AND") 12..15"#);
    insta::assert_snapshot!(describe(r#"SrcAS = "x" |"#), @"Connective prefix=None 12..12");
    insta::assert_snapshot!(describe("SrcAS IN (100) |"), @"Connective prefix=None 15..15");
    insta::assert_snapshot!(describe("(SrcAS = 1) |"), @"Connective prefix=None 12..12");
}

#[test]
fn nothing_inside_comments() {
    insta::assert_snapshot!(describe("SrcAS = 1000 -- h|"), @"none");
    insta::assert_snapshot!(describe("SrcAS = 1 /* x|"), @"none");
}

#[test]
fn value_lists() {
    insta::assert_snapshot!(describe("SrcAS IN (|"), @r#"Value { column: "SrcAS", list: Some(First) } prefix=None 10..10"#);
    insta::assert_snapshot!(describe("SrcAS IN (100|"), @r#"Value { column: "SrcAS", list: Some(First) } prefix=Some("100") 10..13"#);
    insta::assert_snapshot!(describe("SrcAS IN (100,|"), @r#"Value { column: "SrcAS", list: Some(AfterComma { needs_space: true }) } prefix=None 14..14"#);
    insta::assert_snapshot!(describe("SrcAS IN (100, |"), @r#"Value { column: "SrcAS", list: Some(AfterComma { needs_space: false }) } prefix=None 15..15"#);
    insta::assert_snapshot!(describe("SrcAS IN (100, AS6|"), @r#"Value { column: "SrcAS", list: Some(AfterComma { needs_space: false }) } prefix=Some("AS6") 15..18"#);
}

#[test]
fn nothing_after_list_value() {
    insta::assert_snapshot!(describe("SrcAS IN (100 |"), @"none");
}

#[test]
fn cursor_is_clamped() {
    let past_end = classify(&parse("SrcAS"), 100).unwrap();
    assert_eq!(past_end.expected, Expected::Column { offer_not: false });
    assert_eq!((past_end.from, past_end.to), (0, 5));

    let mid_char = classify(&parse("é"), 1).unwrap();
    assert_eq!(mid_char.expected, Expected::Column { offer_not: true });
    assert_eq!((mid_char.from, mid_char.to), (0, 0));
}

#[test]
fn requests_carry_column_and_prefix() {
    let request = ctx("SrcAS = fac|").unwrap().request().unwrap();
    assert_eq!(
        request,
        CompletionRequest {
            what: What::Value,
            column: Some("SrcAS".into()),
            prefix: Some("fac".into()),
        }
    );

    let request = ctx("S|").unwrap().request().unwrap();
    insta::assert_snapshot!(serde_json::to_string(&request).unwrap(), @r#"{"what":"column","prefix":"S"}"#);

    let request = ctx("SrcAS |").unwrap().request().unwrap();
    insta::assert_snapshot!(serde_json::to_string(&request).unwrap(), @r#"{"what":"operator","column":"SrcAS"}"#);
}

#[test]
fn connectives_need_no_request() {
    assert_eq!(ctx("SrcAS = 1 |").unwrap().request(), None);
}
