//! Token classification for syntax highlighting.

use serde::Serialize;

use super::cst::{SyntaxKind, SyntaxNode};
use rowan::TextRange;

/// Highlight class of a token, named after the editor style it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightTag {
    PropertyName,
    String,
    Literal,
    LineComment,
    BlockComment,
    LogicOperator,
    CompareOperator,
    Paren,
    Invalid,
}

impl HighlightTag {
    pub fn for_kind(kind: SyntaxKind) -> Option<Self> {
        let tag = match kind {
            SyntaxKind::Column => Self::PropertyName,
            SyntaxKind::String => Self::String,
            SyntaxKind::Literal => Self::Literal,
            SyntaxKind::LineComment => Self::LineComment,
            SyntaxKind::BlockComment => Self::BlockComment,
            SyntaxKind::And | SyntaxKind::Or | SyntaxKind::Not => Self::LogicOperator,
            SyntaxKind::Operator => Self::CompareOperator,
            SyntaxKind::LeftParen | SyntaxKind::RightParen => Self::Paren,
            SyntaxKind::Garbage => Self::Invalid,
            _ => return None,
        };
        Some(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    #[serde(serialize_with = "serialize_range")]
    pub range: TextRange,
    pub tag: HighlightTag,
}

fn serialize_range<S: serde::Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeTuple;
    let mut tuple = s.serialize_tuple(2)?;
    tuple.serialize_element(&u32::from(range.start()))?;
    tuple.serialize_element(&u32::from(range.end()))?;
    tuple.end()
}

/// Comment delimiters, for editors implementing toggle-comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTokens {
    pub line: &'static str,
    pub block_open: &'static str,
    pub block_close: &'static str,
}

pub const COMMENT_TOKENS: CommentTokens = CommentTokens {
    line: "--",
    block_open: "/*",
    block_close: "*/",
};

/// Highlighted tokens in document order. Unstyled tokens are skipped.
pub fn highlight(root: &SyntaxNode) -> Vec<HighlightSpan> {
    root.descendants_with_tokens()
        .filter_map(|it| it.into_token())
        .filter_map(|t| {
            HighlightTag::for_kind(t.kind()).map(|tag| HighlightSpan {
                range: t.text_range(),
                tag,
            })
        })
        .collect()
}
