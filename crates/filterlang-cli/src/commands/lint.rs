//! Backend validation of a filter.

use std::fmt::Write;
use std::process::ExitCode;

use filterlang_ide::lint::{LintFinding, lint};
use filterlang_ide::Backend;
use filterlang_syntax::parse;

use super::CommandResult;

pub struct LintArgs {
    pub filter: String,
    pub json: bool,
}

pub async fn run<B: Backend>(args: LintArgs, backend: &B) -> CommandResult {
    let parse = parse(&args.filter);
    let findings = lint(&parse, backend).await;

    if args.json {
        println!("{}", serde_json::to_string(&findings).unwrap_or_default());
    } else {
        print!("{}", render(&args.filter, &findings));
    }

    Ok(if findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `from..to severity: message`, followed by the underlined text.
pub fn render(filter: &str, findings: &[LintFinding]) -> String {
    let mut out = String::new();
    for finding in findings {
        let _ = writeln!(
            out,
            "{}..{} {}: {}",
            finding.from,
            finding.to,
            severity_name(finding),
            finding.message
        );
        if let Some(text) = filter.get(finding.from..finding.to) {
            let _ = writeln!(out, "  {text:?}");
        }
    }
    out
}

fn severity_name(finding: &LintFinding) -> &'static str {
    match finding.severity {
        filterlang_ide::LintSeverity::Error => "error",
        filterlang_ide::LintSeverity::Warning => "warning",
        filterlang_ide::LintSeverity::Info => "info",
        filterlang_ide::LintSeverity::Hint => "hint",
    }
}
