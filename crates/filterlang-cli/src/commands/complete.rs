//! Completion at a cursor position, answered by the backend.

use std::fmt::Write;
use std::process::ExitCode;

use filterlang_ide::{Backend, CompletionList, complete};
use filterlang_syntax::parse;

use super::{CommandError, CommandResult};

pub const CURSOR_MARKER: char = '|';

pub struct CompleteArgs {
    pub filter: String,
    pub cursor: usize,
    pub json: bool,
}

/// Removes the `|` marker and returns its offset as the cursor.
///
/// An explicit `--cursor` disables the marker; `|` is then ordinary text.
/// Without either, the cursor sits at the end of the filter.
pub fn locate_cursor(
    filter: String,
    explicit: Option<usize>,
) -> Result<(String, usize), CommandError> {
    if let Some(cursor) = explicit {
        if cursor > filter.len() {
            return Err(CommandError::Usage(format!(
                "cursor {cursor} is past the end of the filter ({} bytes)",
                filter.len()
            )));
        }
        return Ok((filter, cursor));
    }

    match filter.find(CURSOR_MARKER) {
        Some(cursor) => {
            let mut text = filter;
            text.remove(cursor);
            Ok((text, cursor))
        }
        None => {
            let cursor = filter.len();
            Ok((filter, cursor))
        }
    }
}

pub async fn run<B: Backend>(args: CompleteArgs, backend: &B) -> CommandResult {
    let parse = parse(&args.filter);
    let list = complete(&parse, args.cursor, backend).await;

    if args.json {
        println!("{}", serde_json::to_string(&list).unwrap_or_default());
    } else {
        print!("{}", render(&list));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn render(list: &CompletionList) -> String {
    let mut out = String::new();
    let range = match list.to {
        Some(to) => format!("{}..{}", list.from, to),
        None => format!("{}", list.from),
    };
    let _ = writeln!(out, "# {} option(s) replacing {range}", list.options.len());
    for option in &list.options {
        let _ = writeln!(
            out,
            "{}\t{}\t{:?}",
            option.label,
            option.detail.as_deref().unwrap_or(""),
            option.apply
        );
    }
    out
}
