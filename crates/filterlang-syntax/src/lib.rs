//! Resilient parser for the flow filter language.
//!
//! The parser never fails: any input, including a half-typed filter, yields a
//! lossless concrete syntax tree whose text is exactly the input. Malformed
//! regions become `Error` nodes and are described by [`Diagnostics`].
//!
//! # Example
//!
//! ```
//! use filterlang_syntax::parse;
//!
//! let parse = parse("SrcAS = 1000 AND (");
//! assert_eq!(parse.syntax().text().to_string(), "SrcAS = 1000 AND (");
//! assert!(parse.diagnostics().has_errors());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod cst;
pub mod diagnostics;
pub mod dump;
pub mod highlight;
pub mod lexer;
pub mod resolve;

mod parser;
mod grammar;
mod invariants;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod resolve_tests;

pub use cst::{FilterLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use diagnostics::{
    DiagnosticKind, DiagnosticMessage, Diagnostics, DiagnosticsPrinter, Severity,
};
pub use resolve::{Side, prev_significant_token, resolve};
pub use rowan::{GreenNode, NodeOrToken, TextRange, TextSize};

pub use self::parser::DEFAULT_RECURSION_LIMIT;

use self::parser::Parser;
use lexer::lex;

/// Parse result: the green tree plus everything the parser had to say about it.
///
/// Both halves are `Send + Sync`, so a `Parse` can be stored in a shared snapshot
/// and handed to other tasks. Red nodes are created on demand with [`Parse::syntax`].
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Creates a navigable view over the immutable green tree.
    /// This is cheap; the red tree is built lazily.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> ast::Filter {
        ast::Filter::cast(self.syntax()).expect("parser always produces a Filter root")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// No errors. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    pub fn dump_cst(&self) -> String {
        dump::CstPrinter::new(&self.syntax()).dump()
    }

    pub fn dump_cst_full(&self) -> String {
        dump::CstPrinter::new(&self.syntax()).with_trivia(true).dump()
    }

    /// One line per diagnostic, in emission order.
    pub fn dump_diagnostics(&self) -> String {
        let mut out = String::new();
        for diag in self.diagnostics.iter() {
            out.push_str(&diag.to_string());
            out.push('\n');
        }
        out
    }
}

/// Parses `source` into a syntax tree. Total: never fails, never panics.
pub fn parse(source: &str) -> Parse {
    parse_with_parser(Parser::new(source, lex(source)))
}

/// Like [`parse`], with a custom limit on nested groups and negations.
pub fn parse_with_recursion_limit(source: &str, limit: u32) -> Parse {
    parse_with_parser(Parser::new(source, lex(source)).with_recursion_limit(limit))
}

fn parse_with_parser(mut parser: Parser) -> Parse {
    parser.parse_root();
    let (green, diagnostics) = parser.finish();
    Parse { green, diagnostics }
}
