//! Classifying the cursor position into what the user is about to type.
//!
//! Everything here is synchronous and works on a parsed snapshot; red tree
//! nodes never outlive [`classify`], so the result can be carried across an
//! `await`.

use filterlang_syntax::ast::Comparison;
use filterlang_syntax::lexer::{is_terminated_string, unescape, unquote};
use filterlang_syntax::{
    NodeOrToken, Parse, Side, SyntaxKind, SyntaxNode, SyntaxToken, TextSize,
    prev_significant_token, resolve,
};

use crate::backend::{CompletionRequest, What};

/// How a value gets inserted when the cursor is inside a value list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPosition {
    /// Right after the opening `(`
    First,
    /// After a `,`. `needs_space` when the cursor touches the comma.
    AfterComma { needs_space: bool },
}

/// Syntactic category expected at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Start of a clause. `offer_not` adds a `NOT` keyword option.
    Column { offer_not: bool },
    Operator { column: String },
    Value {
        column: String,
        list: Option<ListPosition>,
    },
    /// After a complete clause: `AND`, `OR` and their negated forms.
    Connective,
}

/// Result of classification: what is expected, what was typed, and the byte
/// range `[from, to)` a chosen completion replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    pub expected: Expected,
    pub prefix: Option<String>,
    pub from: usize,
    pub to: usize,
}

impl CompletionContext {
    /// Backend request for this context. `None` when options are static.
    pub fn request(&self) -> Option<CompletionRequest> {
        let (what, column) = match &self.expected {
            Expected::Column { .. } => (What::Column, None),
            Expected::Operator { column } => (What::Operator, Some(column.clone())),
            Expected::Value { column, .. } => (What::Value, Some(column.clone())),
            Expected::Connective => return None,
        };
        Some(CompletionRequest {
            what,
            column,
            prefix: self.prefix.clone(),
        })
    }

    pub fn list_position(&self) -> Option<ListPosition> {
        match &self.expected {
            Expected::Value { list, .. } => *list,
            _ => None,
        }
    }
}

/// Classifies the byte offset `cursor` in `parse`.
///
/// Returns `None` where nothing should be offered: inside comments, right after
/// a closed string, or anywhere the preceding syntax does not determine a category.
/// Offsets past the end or inside a multi-byte character are moved back to the
/// nearest character boundary.
pub fn classify(parse: &Parse, cursor: usize) -> Option<CompletionContext> {
    classify_clamped(parse, cursor).1
}

/// [`classify`], also handing back the cursor after clamping.
pub(crate) fn classify_clamped(parse: &Parse, cursor: usize) -> (usize, Option<CompletionContext>) {
    let root = parse.syntax();
    let cursor = floor_char_boundary(&root.text().to_string(), cursor);
    (cursor, classify_at(&root, cursor))
}

fn classify_at(root: &SyntaxNode, cursor: usize) -> Option<CompletionContext> {
    let offset = TextSize::from(cursor as u32);

    let touching = match resolve(root, offset, Side::Before) {
        NodeOrToken::Token(token) => Some(token),
        NodeOrToken::Node(_) => None,
    };

    if let Some(token) = &touching {
        if token.kind().is_comment() {
            return None;
        }
        if token.kind() == SyntaxKind::String
            && is_terminated_string(token.text())
            && token.text_range().end() == offset
        {
            return None;
        }
    }

    let partial = touching.clone().filter(|t| is_partial(t, offset));
    let anchor = match (&partial, &touching) {
        (Some(partial), _) => prev_significant_token(partial),
        (None, Some(token)) if token.kind().is_trivia() => prev_significant_token(token),
        (None, Some(token)) => Some(token.clone()),
        (None, None) => None,
    };

    let mut expected = expected_after(anchor.as_ref(), partial.is_none(), offset)?;

    let prefix = match &partial {
        None => None,
        Some(token) if token.kind() == SyntaxKind::String => {
            // Quotes only make sense where a value goes
            if !matches!(expected, Expected::Value { .. }) {
                return None;
            }
            Some(unescape(unquote(token.text())).into_owned()).filter(|p| !p.is_empty())
        }
        Some(token) => Some(token.text().to_string()),
    };

    if let Expected::Column { offer_not } = &mut expected {
        *offer_not = *offer_not
            && prefix
                .as_deref()
                .is_none_or(|p| "NOT".starts_with(&p.to_ascii_uppercase()));
    }

    let (from, to) = match &partial {
        Some(token) => {
            let range = token.text_range();
            (usize::from(range.start()), usize::from(range.end()))
        }
        None => (cursor, cursor),
    };

    Some(CompletionContext {
        expected,
        prefix,
        from,
        to,
    })
}

/// Token the user may still be typing: a word, keyword, operator, or an open string.
fn is_partial(token: &SyntaxToken, offset: TextSize) -> bool {
    match token.kind() {
        SyntaxKind::Column | SyntaxKind::Literal | SyntaxKind::Word | SyntaxKind::Operator => true,
        SyntaxKind::String => {
            !is_terminated_string(token.text()) || token.text_range().end() > offset
        }
        kind => kind.is_keyword(),
    }
}

fn expected_after(
    anchor: Option<&SyntaxToken>,
    touches_cursor: bool,
    offset: TextSize,
) -> Option<Expected> {
    let Some(anchor) = anchor else {
        return Some(Expected::Column { offer_not: true });
    };
    let parent = anchor.parent();
    let parent_kind = parent.as_ref().map(SyntaxNode::kind);

    let expected = match anchor.kind() {
        SyntaxKind::And | SyntaxKind::Or => Expected::Column { offer_not: true },
        SyntaxKind::Not => Expected::Column { offer_not: false },
        SyntaxKind::LeftParen if parent_kind == Some(SyntaxKind::ValueList) => Expected::Value {
            column: list_column(parent.as_ref()?)?,
            list: Some(ListPosition::First),
        },
        SyntaxKind::LeftParen => Expected::Column { offer_not: true },
        SyntaxKind::Comma if parent_kind == Some(SyntaxKind::ValueList) => Expected::Value {
            column: list_column(parent.as_ref()?)?,
            list: Some(ListPosition::AfterComma {
                needs_space: touches_cursor && anchor.text_range().end() == offset,
            }),
        },
        SyntaxKind::Column => Expected::Operator {
            column: anchor.text().to_string(),
        },
        SyntaxKind::Operator => Expected::Value {
            column: comparison_column(parent?)?,
            list: None,
        },
        SyntaxKind::Literal if parent_kind == Some(SyntaxKind::Comparison) => Expected::Connective,
        SyntaxKind::String
            if parent_kind == Some(SyntaxKind::Comparison)
                && is_terminated_string(anchor.text()) =>
        {
            Expected::Connective
        }
        SyntaxKind::RightParen
            if matches!(
                parent_kind,
                Some(SyntaxKind::Group | SyntaxKind::ValueList)
            ) =>
        {
            Expected::Connective
        }
        _ => return None,
    };

    Some(expected)
}

fn comparison_column(node: SyntaxNode) -> Option<String> {
    Comparison::cast(node)?
        .column()
        .map(|t| t.text().to_string())
}

fn list_column(list: &SyntaxNode) -> Option<String> {
    comparison_column(list.parent()?)
}

pub(crate) fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
