use filterlang_ide::{CompletionList, CompletionOption};

use super::CommandError;
use super::complete::{locate_cursor, render};

#[test]
fn marker_sets_cursor() {
    let (text, cursor) = locate_cursor("SrcAS = 1000 AND |".into(), None).unwrap();
    assert_eq!(text, "SrcAS = 1000 AND ");
    assert_eq!(cursor, 17);
}

#[test]
fn marker_in_the_middle() {
    let (text, cursor) = locate_cursor("S|rc =".into(), None).unwrap();
    assert_eq!((text.as_str(), cursor), ("Src =", 1));
}

#[test]
fn cursor_defaults_to_end() {
    let (text, cursor) = locate_cursor("SrcAS ".into(), None).unwrap();
    assert_eq!((text.as_str(), cursor), ("SrcAS ", 6));
}

#[test]
fn explicit_cursor_keeps_marker_text() {
    let (text, cursor) = locate_cursor("a = \"x|y\"".into(), Some(4)).unwrap();
    assert_eq!((text.as_str(), cursor), ("a = \"x|y\"", 4));
}

#[test]
fn explicit_cursor_past_end() {
    let err = locate_cursor("a".into(), Some(5)).unwrap_err();
    assert!(matches!(err, CommandError::Usage(_)));
    insta::assert_snapshot!(err.to_string(), @"cursor 5 is past the end of the filter (1 bytes)");
}

#[test]
fn renders_options() {
    let list = CompletionList {
        from: 13,
        to: Some(15),
        options: vec![
            CompletionOption {
                label: "\"something\"".into(),
                detail: Some("network name".into()),
                apply: "\"something\" ".into(),
            },
            CompletionOption {
                label: "NOT".into(),
                detail: None,
                apply: "NOT ".into(),
            },
        ],
    };
    assert_eq!(
        render(&list),
        "# 2 option(s) replacing 13..15\n\
         \"something\"\tnetwork name\t\"\\\"something\\\" \"\n\
         NOT\t\t\"NOT \"\n"
    );
}

#[test]
fn renders_empty_list() {
    insta::assert_snapshot!(render(&CompletionList::empty(17)), @"# 0 option(s) replacing 17");
}
