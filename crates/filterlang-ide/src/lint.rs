//! Mapping backend validation errors, and local syntax diagnostics, onto
//! editor findings.

use filterlang_syntax::{NodeOrToken, Parse, Side, SyntaxKind, SyntaxNode, TextRange, TextSize, resolve};
use serde::Serialize;
use tracing::warn;

use crate::backend::{Backend, RemoteError};
use crate::context::floor_char_boundary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
    Hint,
}

/// A finding underlining `[from, to)` (byte offsets) in the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    pub from: usize,
    pub to: usize,
    pub severity: LintSeverity,
    pub message: String,
}

/// Sends the filter text to `backend` for validation and maps the errors.
///
/// A failing backend yields no findings.
pub async fn lint<B: Backend>(parse: &Parse, backend: &B) -> Vec<LintFinding> {
    let text = parse.text();
    match backend.validate(&text).await {
        Ok(errors) => map_errors(parse, &errors),
        Err(err) => {
            warn!(error = %err, "filter validation failed");
            Vec::new()
        }
    }
}

pub fn map_errors(parse: &Parse, errors: &[RemoteError]) -> Vec<LintFinding> {
    let root = parse.syntax();
    let text = root.text().to_string();
    errors
        .iter()
        .map(|error| map_error(&root, &text, error))
        .collect()
}

/// Maps one backend error onto the smallest syntax element at its offset.
///
/// The range is never empty unless the offset is at the very start of an
/// empty region; an editor would not show an empty underline.
pub fn map_error(root: &SyntaxNode, text: &str, error: &RemoteError) -> LintFinding {
    let offset = char_to_byte(text, error.offset);

    let (from, to) = match element_range(root, offset) {
        Some(range) => (usize::from(range.start()), usize::from(range.end())),
        None => word_at(text, offset).unwrap_or((offset, offset)),
    };
    let (from, to) = if from == to {
        if offset > 0 {
            (floor_char_boundary(text, offset - 1), offset)
        } else {
            (0, 0)
        }
    } else {
        (from, to)
    };

    LintFinding {
        from,
        to,
        severity: LintSeverity::Error,
        message: error.message.clone(),
    }
}

/// Parser diagnostics as findings, for editors that show both.
pub fn syntax_findings(parse: &Parse) -> Vec<LintFinding> {
    parse
        .diagnostics()
        .filtered()
        .into_iter()
        .map(|diag| {
            let range = diag.range();
            LintFinding {
                from: usize::from(range.start()),
                to: usize::from(range.end()),
                severity: if diag.is_error() {
                    LintSeverity::Error
                } else {
                    LintSeverity::Warning
                },
                message: diag.message().to_string(),
            }
        })
        .collect()
}

fn element_range(root: &SyntaxNode, offset: usize) -> Option<TextRange> {
    match resolve(root, TextSize::from(offset as u32), Side::After) {
        NodeOrToken::Token(token) if token.kind().is_whitespace() => token
            .parent()
            .filter(|parent| parent.kind() != SyntaxKind::Filter)
            .map(|parent| parent.text_range()),
        NodeOrToken::Token(token) => Some(token.text_range()),
        NodeOrToken::Node(node) if node.kind() == SyntaxKind::Filter => None,
        NodeOrToken::Node(node) => Some(node.text_range()),
    }
}

/// Byte offset of the `chars`-th character, clamped to the end of `text`.
fn char_to_byte(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(idx, _)| idx)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word touching `offset` on either side.
fn word_at(text: &str, offset: usize) -> Option<(usize, usize)> {
    let start = text[..offset]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map_or(offset, |(idx, _)| idx);
    let end = text[offset..]
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(text.len(), |(idx, _)| offset + idx);
    (start < end).then_some((start, end))
}
