//! Print the highlight class of every token.

use std::fmt::Write;
use std::process::ExitCode;

use filterlang_syntax::highlight::highlight;
use filterlang_syntax::parse;

use super::CommandResult;

pub struct HighlightArgs {
    pub filter: String,
    pub json: bool,
}

pub fn run(args: HighlightArgs) -> CommandResult {
    let spans = highlight(&parse(&args.filter).syntax());
    if args.json {
        println!("{}", serde_json::to_string(&spans).unwrap_or_default());
    } else {
        print!("{}", render(&args.filter));
    }
    Ok(ExitCode::SUCCESS)
}

/// One line per span: range, class and covered text.
pub fn render(filter: &str) -> String {
    let mut out = String::new();
    for span in highlight(&parse(filter).syntax()) {
        let start = usize::from(span.range.start());
        let end = usize::from(span.range.end());
        let _ = writeln!(out, "{start}..{end} {:?} {:?}", span.tag, &filter[start..end]);
    }
    out
}
