//! Show the syntax tree of a filter.

use std::process::ExitCode;

use filterlang_syntax::dump::{CstPrinter, pretty};
use filterlang_syntax::parse;

use super::CommandResult;

pub struct AstArgs {
    pub filter: String,
    pub trivia: bool,
    pub spans: bool,
    /// Print the canonical one-line form instead of the tree
    pub pretty: bool,
}

pub fn run(args: AstArgs) -> CommandResult {
    print!("{}", render(&args));
    Ok(ExitCode::SUCCESS)
}

pub fn render(args: &AstArgs) -> String {
    let parse = parse(&args.filter);
    if args.pretty {
        return format!("{}\n", pretty(&parse.syntax()));
    }
    CstPrinter::new(&parse.syntax())
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump()
}
