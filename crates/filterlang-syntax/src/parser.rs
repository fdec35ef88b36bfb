//! Parser state machine and low-level operations.

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::diagnostics::{DiagnosticKind, Diagnostics};
use super::lexer::{Token, token_text};

/// Default limit for nested groups and negations.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    recursion_limit: u32,
    pub(super) nesting_exhausted: bool,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            debug_fuel: std::cell::Cell::new(256),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            nesting_exhausted: false,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub(super) fn finish(mut self) -> (GreenNode, Diagnostics) {
        self.drain_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    /// Current non-trivia token kind; `Error` at EOF.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// True once only trivia (or nothing) remains.
    pub(super) fn eof(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        !self.eof() && self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        !self.eof() && set.contains(self.current())
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            let token = self.tokens[self.pos];
            self.pos += 1;
            self.check_trivia(token);
            self.trivia_buffer.push(token);
        }
    }

    /// Comments are trivia, but an unterminated block comment still deserves a diagnostic.
    fn check_trivia(&mut self, token: Token) {
        if token.kind == SyntaxKind::BlockComment
            && !super::lexer::is_terminated_block_comment(token_text(self.source, &token))
            && self.should_report(token.span.start())
        {
            self.diagnostics
                .report(DiagnosticKind::UnterminatedComment, token.span)
                .emit();
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn bump(&mut self) {
        let kind = self.current();
        self.bump_remap(kind);
    }

    /// Consumes the current token, recording it in the tree under `kind`.
    /// Used to turn a `Word` into `Column`/`Literal` and operator tokens into `Operator`.
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Reports at the current token without consuming it.
    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// Reports at an explicit range, e.g. a token that was already consumed.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_as_error();
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    /// Swallows everything that is left into one `Error` node.
    pub(super) fn bail_out_nested(&mut self) {
        if !self.nesting_exhausted {
            self.nesting_exhausted = true;
            let range = TextRange::new(self.current_span().start(), self.eof_offset());
            self.diagnostics
                .report(DiagnosticKind::NestingTooDeep, range)
                .emit();
        }
        if self.eof() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        while !self.eof() {
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        let full_range = TextRange::new(open_range.start(), current.end());
        self.diagnostics
            .report(kind, full_range)
            .message(message)
            .related_to(related_msg, open_range)
            .emit();
    }
}
