use rowan::TextSize;

use crate::{Side, SyntaxElement, SyntaxKind, parse, prev_significant_token, resolve};

fn describe(element: &SyntaxElement) -> String {
    let range = element.text_range();
    format!(
        "{:?}@{}..{}",
        element.kind(),
        u32::from(range.start()),
        u32::from(range.end())
    )
}

fn at(input: &str, offset: u32, side: Side) -> String {
    let root = parse(input).syntax();
    describe(&resolve(&root, TextSize::from(offset), side))
}

#[test]
fn before_bias_prefers_element_ending_at_offset() {
    let input = "SrcAS = 1000";
    assert_eq!(at(input, 0, Side::Before), "Filter@0..12");
    assert_eq!(at(input, 3, Side::Before), "Column@0..5");
    assert_eq!(at(input, 5, Side::Before), "Column@0..5");
    assert_eq!(at(input, 6, Side::Before), "Whitespace@5..6");
    assert_eq!(at(input, 12, Side::Before), "Literal@8..12");
}

#[test]
fn after_bias_prefers_element_starting_at_offset() {
    let input = "SrcAS = 1000";
    assert_eq!(at(input, 0, Side::After), "Column@0..5");
    assert_eq!(at(input, 5, Side::After), "Whitespace@5..6");
    assert_eq!(at(input, 8, Side::After), "Literal@8..12");
    assert_eq!(at(input, 12, Side::After), "Filter@0..12");
}

#[test]
fn offsets_are_clamped() {
    assert_eq!(at("a = 1", 100, Side::Before), "Literal@4..5");
    assert_eq!(at("a = 1", 100, Side::After), "Filter@0..5");
}

#[test]
fn empty_document_resolves_to_root() {
    assert_eq!(at("", 0, Side::Before), "Filter@0..0");
    assert_eq!(at("", 0, Side::After), "Filter@0..0");
}

#[test]
fn descends_into_nested_nodes() {
    let input = "NOT (a IN (1, 2))";
    assert_eq!(at(input, 12, Side::Before), "Literal@11..12");
    assert_eq!(at(input, 13, Side::Before), "Comma@12..13");
    assert_eq!(at(input, 12, Side::After), "Comma@12..13");
}

#[test]
fn previous_significant_token_skips_trivia() {
    let root = parse("SrcAS /* c */ -- x\n IN").syntax();
    let token = root.last_token().unwrap();
    assert_eq!(token.kind(), SyntaxKind::Operator);
    let prev = prev_significant_token(&token).unwrap();
    assert_eq!(prev.kind(), SyntaxKind::Column);
    assert_eq!(prev.text(), "SrcAS");
    assert!(prev_significant_token(&prev).is_none());
}
