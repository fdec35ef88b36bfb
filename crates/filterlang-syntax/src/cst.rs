//! Syntax kinds for the filter language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds and remapped leaf kinds lack token/regex
//! attributes. `FilterLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Lexer tokens first, then leaf kinds assigned by the parser,
/// then nodes, then the `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    LeftParen = 0,

    #[token(")")]
    RightParen,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token("!=")]
    NotEquals,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEquals,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEquals,

    /// `<<`: address belongs to subnet
    #[token("<<")]
    InSubnet,

    /// `!<<`: address outside of subnet
    #[token("!<<")]
    NotInSubnet,

    #[token("in", ignore(case))]
    KwIn,

    #[token("notin", ignore(case))]
    KwNotIn,

    #[token("like", ignore(case))]
    KwLike,

    #[token("unlike", ignore(case))]
    KwUnlike,

    #[token("ilike", ignore(case))]
    KwILike,

    #[token("iunlike", ignore(case))]
    KwIUnlike,

    #[token("and", ignore(case))]
    And,

    #[token("or", ignore(case))]
    Or,

    #[token("not", ignore(case))]
    Not,

    /// Quoted string. The closing quote is optional so that a string being typed
    /// still lexes as one token; the parser reports the missing quote.
    #[regex(r#""(?:[^"\\\n]|\\.)*"?"#, allow_greedy = true)]
    #[regex(r"'(?:[^'\\\n]|\\.)*'?", allow_greedy = true)]
    String,

    /// Bare word. Defined after keywords so they take precedence on equal length.
    /// The parser turns it into `Column` or `Literal` depending on position.
    #[regex(r"[a-zA-Z0-9_.:/+][a-zA-Z0-9_.:/+\-]*")]
    Word,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,

    /// Non-nesting. An unterminated comment runs to the end of input.
    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    #[regex(r"/\*(?:[^*]|\*+[^*/])*\**", allow_greedy = true)]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,

    // --- Leaf kinds assigned by the parser ---
    /// `Word` in column position
    Column,
    /// Any comparison operator token
    Operator,
    /// `Word` in value position
    Literal,

    // --- Node kinds (non-terminals) ---
    Filter,
    Comparison,
    Group,
    Negation,
    ValueList,
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace
                | SyntaxKind::Newline
                | SyntaxKind::LineComment
                | SyntaxKind::BlockComment
        )
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, SyntaxKind::LineComment | SyntaxKind::BlockComment)
    }

    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Newline)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, SyntaxKind::Error | SyntaxKind::Garbage)
    }

    /// Lexer kinds that the parser remaps to `Operator`.
    #[inline]
    pub fn is_operator(self) -> bool {
        token_sets::OPERATORS.contains(self)
    }

    /// Keywords are matched case-insensitively and may be partially typed words.
    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::KwIn
                | SyntaxKind::KwNotIn
                | SyntaxKind::KwLike
                | SyntaxKind::KwUnlike
                | SyntaxKind::KwILike
                | SyntaxKind::KwIUnlike
                | SyntaxKind::And
                | SyntaxKind::Or
                | SyntaxKind::Not
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterLang {}

impl Language for FilterLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<FilterLang>;
pub type SyntaxToken = rowan::SyntaxToken<FilterLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < SyntaxKind::__LAST as u16 {
                // SAFETY: bounds checked against `__LAST` above
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::{SyntaxKind, TokenSet};

    pub const OPERATORS: TokenSet = TokenSet::new(&[
        SyntaxKind::Equals,
        SyntaxKind::NotEquals,
        SyntaxKind::Less,
        SyntaxKind::LessEquals,
        SyntaxKind::Greater,
        SyntaxKind::GreaterEquals,
        SyntaxKind::InSubnet,
        SyntaxKind::NotInSubnet,
        SyntaxKind::KwIn,
        SyntaxKind::KwNotIn,
        SyntaxKind::KwLike,
        SyntaxKind::KwUnlike,
        SyntaxKind::KwILike,
        SyntaxKind::KwIUnlike,
    ]);

    /// FIRST set of a clause.
    pub const CLAUSE_FIRST: TokenSet =
        TokenSet::new(&[SyntaxKind::Word, SyntaxKind::LeftParen, SyntaxKind::Not]);

    pub const CONNECTIVES: TokenSet = TokenSet::new(&[SyntaxKind::And, SyntaxKind::Or]);

    pub const SCALAR_VALUES: TokenSet = TokenSet::new(&[SyntaxKind::Word, SyntaxKind::String]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[
        SyntaxKind::Whitespace,
        SyntaxKind::Newline,
        SyntaxKind::LineComment,
        SyntaxKind::BlockComment,
    ]);

    /// Tokens that end a value list even when its `)` is missing.
    pub const VALUE_LIST_RECOVERY: TokenSet =
        TokenSet::new(&[SyntaxKind::And, SyntaxKind::Or, SyntaxKind::Not]);
}
