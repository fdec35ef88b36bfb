use std::path::PathBuf;

use super::CommandError;
use super::input::{load, strip_final_newline};
use crate::cli::FilterArgs;

#[test]
fn inline_text_wins() {
    let args = FilterArgs {
        text: Some("SrcAS = 1\n".into()),
        file: None,
    };
    assert_eq!(load(&args).unwrap(), "SrcAS = 1");
}

#[test]
fn missing_file_is_io_error() {
    let args = FilterArgs {
        text: None,
        file: Some(PathBuf::from("/nonexistent/filter.txt")),
    };
    let err = load(&args).unwrap_err();
    assert!(matches!(err, CommandError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read /nonexistent/filter.txt: "));
}

#[test]
fn only_one_final_newline_is_stripped() {
    assert_eq!(strip_final_newline("a = 1\r\n".into()), "a = 1");
    assert_eq!(strip_final_newline("a = 1\n\n".into()), "a = 1\n");
    assert_eq!(strip_final_newline("a = 1".into()), "a = 1");
}
