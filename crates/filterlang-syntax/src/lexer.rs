//! Lexer for the filter language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. This keeps the token stream manageable while
//! the user is halfway through typing something.

use std::borrow::Cow;

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Consecutive lexer errors are coalesced into single `Garbage` tokens, so the
/// concatenated token texts always reproduce `source` exactly.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

/// Whether a quoted string token carries its closing quote.
pub fn is_terminated_string(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(quote) = chars.next() else {
        return false;
    };
    let body = chars.as_str();
    let Some(last) = body.chars().last() else {
        return false;
    };
    if last != quote {
        return false;
    }
    // An escaped quote does not close the string.
    let trailing_backslashes = body[..body.len() - last.len_utf8()]
        .chars()
        .rev()
        .take_while(|c| *c == '\\')
        .count();
    trailing_backslashes % 2 == 0
}

/// Whether a block comment token carries its closing `*/`.
pub fn is_terminated_block_comment(text: &str) -> bool {
    text.len() >= 4 && text.ends_with("*/")
}

/// Strips the surrounding quotes of a string token, tolerating a missing closing quote.
/// Escape sequences are left alone; see [`unescape`].
pub fn unquote(text: &str) -> &str {
    let Some(quote) = text.chars().next().filter(|c| *c == '"' || *c == '\'') else {
        return text;
    };
    let inner = &text[quote.len_utf8()..];
    if is_terminated_string(text) {
        &inner[..inner.len() - quote.len_utf8()]
    } else {
        inner
    }
}

/// Resolves `\x` to `x` in the body of a string. A lone trailing backslash is kept.
pub fn unescape(body: &str) -> Cow<'_, str> {
    if !body.contains('\\') {
        return Cow::Borrowed(body);
    }
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next().unwrap_or('\\')),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
