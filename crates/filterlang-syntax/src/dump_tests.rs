use crate::dump::pretty;
use crate::{SyntaxKind, parse};

fn significant_kinds(input: &str) -> Vec<SyntaxKind> {
    parse(input)
        .syntax()
        .descendants_with_tokens()
        .map(|it| it.kind())
        .filter(|kind| !kind.is_trivia())
        .collect()
}

#[test]
fn pretty_normalizes_spacing_and_case() {
    let parse = parse("srcas   in(1 ,2)and not  x=\"y\" -- trailing");
    insta::assert_snapshot!(pretty(&parse.syntax()), @r#"srcas IN (1, 2) AND NOT x = "y""#);
}

#[test]
fn pretty_keeps_groups() {
    let parse = parse("( a = 1 or\n b = 2 )  AND c << 10.0.0.0/8");
    insta::assert_snapshot!(pretty(&parse.syntax()), @"(a = 1 OR b = 2) AND c << 10.0.0.0/8");
}

#[test]
fn reparsing_pretty_output_is_stable() {
    for input in [
        "SrcAS = 1000",
        "NOT (a IN (1, 2) OR b != 'c') AND d iLike \"%x%\"",
        "a = 1 -- comment\nOR /* inline */ b = 2",
        "SrcAS IN (1, 2",
        "AND ) x",
    ] {
        let once = pretty(&parse(input).syntax());
        assert_eq!(significant_kinds(&once), significant_kinds(input), "{input}");
        let twice = pretty(&parse(&once).syntax());
        assert_eq!(once, twice);
    }
}

#[test]
fn full_dump_includes_trivia() {
    let parse = parse("a = 1 -- c");
    insta::assert_snapshot!(parse.dump_cst_full(), @r#"
    Filter
      Comparison
        Column "a"
        Whitespace " "
        Operator "="
        Whitespace " "
        Literal "1"
      Whitespace " "
      LineComment "-- c"
    "#);
}
