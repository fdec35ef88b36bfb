//! Locating syntax elements by offset.

use rowan::{NodeOrToken, TextSize};

use super::cst::{SyntaxElement, SyntaxNode, SyntaxToken};

/// Which neighbour wins when an offset sits on the boundary between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Prefer the element ending at the offset: matches when `start < offset <= end`.
    /// This is what a cursor "touches" while typing.
    Before,
    /// Prefer the element starting at the offset: matches when `start <= offset < end`.
    After,
}

impl Side {
    fn matches(self, start: TextSize, end: TextSize, offset: TextSize) -> bool {
        match self {
            Side::Before => start < offset && offset <= end,
            Side::After => start <= offset && offset < end,
        }
    }
}

/// Deepest element at `offset`, or the root when nothing matches.
///
/// Offsets past the end of the text are clamped.
pub fn resolve(root: &SyntaxNode, offset: TextSize, side: Side) -> SyntaxElement {
    let offset = offset.min(root.text_range().end());
    let mut current = root.clone();

    'descend: loop {
        for child in current.children_with_tokens() {
            let range = child.text_range();
            if !side.matches(range.start(), range.end(), offset) {
                continue;
            }
            match child {
                NodeOrToken::Node(node) => {
                    current = node;
                    continue 'descend;
                }
                NodeOrToken::Token(_) => return child,
            }
        }
        return NodeOrToken::Node(current);
    }
}

/// Closest preceding token that is not whitespace or a comment.
pub fn prev_significant_token(token: &SyntaxToken) -> Option<SyntaxToken> {
    let mut current = token.prev_token();
    while let Some(t) = current {
        if !t.kind().is_trivia() {
            return Some(t);
        }
        current = t.prev_token();
    }
    None
}
