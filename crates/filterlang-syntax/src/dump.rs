//! Textual renderings of a syntax tree: an indented CST dump for debugging
//! and a canonical one-line form of the filter.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::cst::{SyntaxKind, SyntaxNode};

pub struct CstPrinter<'a> {
    root: &'a SyntaxNode,
    trivia: bool,
    spans: bool,
}

impl<'a> CstPrinter<'a> {
    pub fn new(root: &'a SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());
        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            "@{}..{}",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

/// Canonical single-line form: comments dropped, keywords and operators
/// upper-cased, one space between tokens except inside parentheses and before commas.
///
/// Parsing the output yields the same tree shape as parsing the input.
pub fn pretty(root: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut prev: Option<SyntaxKind> = None;

    for token in root
        .descendants_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
    {
        let kind = token.kind();
        let glued = matches!(prev, None | Some(SyntaxKind::LeftParen))
            || matches!(kind, SyntaxKind::RightParen | SyntaxKind::Comma);
        if !glued {
            out.push(' ');
        }

        match kind {
            SyntaxKind::And | SyntaxKind::Or | SyntaxKind::Not | SyntaxKind::Operator => {
                out.push_str(&token.text().to_ascii_uppercase());
            }
            _ => out.push_str(token.text()),
        }
        prev = Some(kind);
    }

    out
}
