use crate::lexer::{
    is_terminated_block_comment, is_terminated_string, lex, token_text, unescape, unquote,
};

fn snapshot(input: &str) -> String {
    lex(input)
        .iter()
        .map(|t| format!("{:?} {:?}\n", t.kind, token_text(input, t)))
        .collect()
}

#[test]
fn simple_comparison() {
    insta::assert_snapshot!(snapshot("SrcAS = 1000"), @r#"
    Word "SrcAS"
    Whitespace " "
    Equals "="
    Whitespace " "
    Word "1000"
    "#);
}

#[test]
fn keywords_ignore_case() {
    insta::assert_snapshot!(snapshot("and Or NOT in NotIn iLike"), @r#"
    And "and"
    Whitespace " "
    Or "Or"
    Whitespace " "
    Not "NOT"
    Whitespace " "
    KwIn "in"
    Whitespace " "
    KwNotIn "NotIn"
    Whitespace " "
    KwILike "iLike"
    "#);
}

#[test]
fn keyword_prefix_is_a_word() {
    insta::assert_snapshot!(snapshot("index Origin notice"), @r#"
    Word "index"
    Whitespace " "
    Word "Origin"
    Whitespace " "
    Word "notice"
    "#);
}

#[test]
fn comparison_operators() {
    insta::assert_snapshot!(snapshot("= != < <= > >= << !<<"), @r#"
    Equals "="
    Whitespace " "
    NotEquals "!="
    Whitespace " "
    Less "<"
    Whitespace " "
    LessEquals "<="
    Whitespace " "
    Greater ">"
    Whitespace " "
    GreaterEquals ">="
    Whitespace " "
    InSubnet "<<"
    Whitespace " "
    NotInSubnet "!<<"
    "#);
}

#[test]
fn addresses_are_single_words() {
    insta::assert_snapshot!(snapshot("10.0.0.0/8 2001:db8::/32 fe80::1"), @r#"
    Word "10.0.0.0/8"
    Whitespace " "
    Word "2001:db8::/32"
    Whitespace " "
    Word "fe80::1"
    "#);
}

#[test]
fn strings() {
    insta::assert_snapshot!(snapshot(r#""abc" 'it\'s' "open"#), @r#"
    String "\"abc\""
    Whitespace " "
    String "'it\\'s'"
    Whitespace " "
    String "\"open"
    "#);
}

#[test]
fn unterminated_string_stops_at_newline() {
    insta::assert_snapshot!(snapshot("\"abc\nAND"), @r#"
    String "\"abc"
    Newline "\n"
    And "AND"
    "#);
}

#[test]
fn comments() {
    insta::assert_snapshot!(snapshot("a -- note\n/* block */ /* open"), @r#"
    Word "a"
    Whitespace " "
    LineComment "-- note"
    Newline "\n"
    BlockComment "/* block */"
    Whitespace " "
    BlockComment "/* open"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a $$ b !"), @r#"
    Word "a"
    Whitespace " "
    Garbage "$$"
    Whitespace " "
    Word "b"
    Whitespace " "
    Garbage "!"
    "#);
}

#[test]
fn tokens_cover_source() {
    for input in ["", "SrcAS = 1", "  ((\"x", "a $ b -- c\r\n/*", "é = ü"] {
        let rebuilt: String = lex(input).iter().map(|t| token_text(input, t)).collect();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn string_termination() {
    assert!(is_terminated_string(r#""abc""#));
    assert!(is_terminated_string("''"));
    assert!(is_terminated_string(r#""a\\""#));
    assert!(!is_terminated_string(r#"""#));
    assert!(!is_terminated_string(r#""abc"#));
    assert!(!is_terminated_string(r#""abc\""#));
    assert!(!is_terminated_string(r#""abc'"#));
}

#[test]
fn block_comment_termination() {
    assert!(is_terminated_block_comment("/**/"));
    assert!(is_terminated_block_comment("/* x */"));
    assert!(!is_terminated_block_comment("/*/"));
    assert!(!is_terminated_block_comment("/* x"));
}

#[test]
fn unquote_strings() {
    assert_eq!(unquote(r#""something""#), "something");
    assert_eq!(unquote(r#""so"#), "so");
    assert_eq!(unquote("'x'"), "x");
    assert_eq!(unquote("bare"), "bare");
    assert_eq!(unquote(r#"""#), "");
}

#[test]
fn unescape_strings() {
    assert_eq!(unescape("plain"), "plain");
    assert_eq!(unescape(r#"a\"b"#), r#"a"b"#);
    assert_eq!(unescape(r"a\\b"), r"a\b");
    assert_eq!(unescape(r"\x"), "x");
    assert_eq!(unescape(r"trailing\"), r"trailing\");
}
