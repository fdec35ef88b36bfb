//! Report syntax errors of a filter.

use std::process::ExitCode;

use filterlang_syntax::parse;

use super::CommandResult;

pub struct CheckArgs {
    /// Shown in diagnostics when the filter came from a file
    pub path: Option<String>,
    pub filter: String,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> CommandResult {
    let parse = parse(&args.filter);
    let diagnostics = parse.diagnostics();

    let failed = if args.strict {
        diagnostics.has_errors() || diagnostics.has_warnings()
    } else {
        diagnostics.has_errors()
    };

    if !diagnostics.is_empty() {
        let mut printer = diagnostics
            .filtered_printer(&args.filter)
            .colored(args.color);
        if let Some(path) = &args.path {
            printer = printer.path(path);
        }
        eprint!("{}", printer.render());
    }

    tracing::debug!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "checked filter"
    );

    // Silent on success
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
