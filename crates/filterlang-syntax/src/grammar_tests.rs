use crate::{parse, parse_with_recursion_limit};
use indoc::indoc;

#[test]
fn empty_filter() {
    let parse = parse("");
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst(), @"Filter");
}

#[test]
fn comment_only() {
    let parse = parse("-- nothing to see");
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst_full(), @r#"
    Filter
      LineComment "-- nothing to see"
    "#);
}

#[test]
fn simple_comparison() {
    let parse = parse("SrcAS = 1000");
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Filter
      Comparison
        Column "SrcAS"
        Operator "="
        Literal "1000"
    "#);
}

#[test]
fn trivia_attachment() {
    let parse = parse("  SrcAS = 1000 ");
    insta::assert_snapshot!(parse.dump_cst_full(), @r#"
    Filter
      Whitespace "  "
      Comparison
        Column "SrcAS"
        Whitespace " "
        Operator "="
        Whitespace " "
        Literal "1000"
      Whitespace " "
    "#);
}

#[test]
fn connectives_and_groups() {
    let parse = parse("SrcAS = 1000 AND (DstPort = 80 OR DstPort = 443)");
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Filter
      Comparison
        Column "SrcAS"
        Operator "="
        Literal "1000"
      And "AND"
      Group
        LeftParen "("
        Comparison
          Column "DstPort"
          Operator "="
          Literal "80"
        Or "OR"
        Comparison
          Column "DstPort"
          Operator "="
          Literal "443"
        RightParen ")"
    "#);
}

#[test]
fn negated_value_list() {
    let parse = parse("NOT SrcAS IN (100, 200)");
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Filter
      Negation
        Not "NOT"
        Comparison
          Column "SrcAS"
          Operator "IN"
          ValueList
            LeftParen "("
            Literal "100"
            Comma ","
            Literal "200"
            RightParen ")"
    "#);
}

#[test]
fn lowercase_keywords_and_strings() {
    let parse = parse("srcas like 'foo%' or not x != y");
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Filter
      Comparison
        Column "srcas"
        Operator "like"
        String "'foo%'"
      Or "or"
      Negation
        Not "not"
        Comparison
          Column "x"
          Operator "!="
          Literal "y"
    "#);
}

#[test]
fn subnet_operators() {
    let parse = parse("SrcAddr << 10.0.0.0/8 AND DstAddr !<< 2001:db8::/32");
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Filter
      Comparison
        Column "SrcAddr"
        Operator "<<"
        Literal "10.0.0.0/8"
      And "AND"
      Comparison
        Column "DstAddr"
        Operator "!<<"
        Literal "2001:db8::/32"
    "#);
}

#[test]
fn multiline_with_comments() {
    let input = indoc! {r#"
    InIfBoundary = external -- only ingress
    AND /* exclude transit */ NOT ExporterName LIKE "edge%"
    "#};

    let parse = parse(input);
    assert!(parse.is_valid());
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Filter
      Comparison
        Column "InIfBoundary"
        Operator "="
        Literal "external"
      And "AND"
      Negation
        Not "NOT"
        Comparison
          Column "ExporterName"
          Operator "LIKE"
          String "\"edge%\""
    "#);
}

#[test]
fn spans_dump() {
    let parse = parse("a = 1");
    insta::assert_snapshot!(crate::dump::CstPrinter::new(&parse.syntax()).with_spans(true).dump(), @r#"
    Filter@0..5
      Comparison@0..5
        Column@0..1 "a"
        Operator@2..3 "="
        Literal@4..5 "1"
    "#);
}

#[test]
fn deep_nesting_within_limit() {
    let parse = parse_with_recursion_limit("NOT NOT (a = 1)", 4);
    assert!(parse.is_valid());
}

#[test]
fn text_is_preserved() {
    for input in [
        "",
        "SrcAS = 1000",
        "SrcAS = 1000 AND (",
        "))) AND OR NOT",
        "DstNetName = \"so",
        "a IN (1 2,, AND b",
        "/* never closed",
        "é ü = ñ",
        "a = 1\r\n-- c\r\nOR b = 2",
    ] {
        assert_eq!(parse(input).text(), input);
    }
}

#[test]
fn root_covers_whole_text() {
    let input = "  x = 1 OR (y = 2  ";
    let root = parse(input).syntax();
    assert_eq!(u32::from(root.text_range().start()), 0);
    assert_eq!(usize::from(root.text_range().end()), input.len());
}

#[test]
fn children_are_properly_nested() {
    let root = parse("NOT (a IN (1, \"2\") OR b = c) AND d ! e").syntax();
    for node in root.descendants() {
        let range = node.text_range();
        let mut last_end = range.start();
        for child in node.children_with_tokens() {
            let child_range = child.text_range();
            assert_eq!(child_range.start(), last_end, "gap or overlap in {:?}", node.kind());
            assert!(range.contains_range(child_range));
            last_end = child_range.end();
        }
        assert_eq!(last_end, range.end());
    }
}
