//! Grammar productions for the filter language.
//!
//! ```text
//! Filter     := Clause ((AND | OR) Clause)*
//! Clause     := NOT Clause | '(' Filter ')' | Column Operator Value
//! Value      := Literal | String | '(' Scalar (',' Scalar)* ')'
//! ```
//!
//! Connectives are flat siblings of the clauses they join; there is no precedence
//! between `AND` and `OR` at the syntax level.

use super::parser::Parser;
use super::cst::SyntaxKind;
use super::cst::token_sets::{
    CLAUSE_FIRST, CONNECTIVES, OPERATORS, SCALAR_VALUES, VALUE_LIST_RECOVERY,
};
use super::diagnostics::DiagnosticKind;
use super::lexer::is_terminated_string;

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Filter);
        self.parse_clauses(false);
        self.eat_trivia();
        self.finish_node();
    }

    /// Sequence of clauses joined by connectives. Stops at EOF, or at `)` inside a group.
    fn parse_clauses(&mut self, in_group: bool) {
        let mut expect_clause = true;
        let mut dangling: Option<&'static str> = None;

        while !self.eof() {
            match self.current() {
                SyntaxKind::RightParen if in_group => break,
                SyntaxKind::RightParen => self.error_and_bump(DiagnosticKind::UnmatchedParen),
                kind if CONNECTIVES.contains(kind) => {
                    let name = connective_name(kind);
                    if expect_clause {
                        self.error_and_bump_msg(
                            DiagnosticKind::ExpectedCondition,
                            format!("before `{name}`"),
                        );
                    } else {
                        self.bump();
                        dangling = Some(name);
                        expect_clause = true;
                    }
                }
                kind if CLAUSE_FIRST.contains(kind) => {
                    if !expect_clause {
                        self.error(DiagnosticKind::ExpectedConnective);
                    }
                    self.parse_clause();
                    expect_clause = false;
                    dangling = None;
                }
                _ => self.error_and_bump_msg(
                    DiagnosticKind::UnexpectedToken,
                    "expected a condition such as `Column = value`",
                ),
            }
        }

        if let Some(name) = dangling {
            self.error_msg(DiagnosticKind::ExpectedCondition, format!("after `{name}`"));
        }
    }

    fn parse_clause(&mut self) {
        if !self.enter_recursion() {
            self.bail_out_nested();
            return;
        }

        match self.current() {
            SyntaxKind::Not => self.parse_negation(),
            SyntaxKind::LeftParen => self.parse_group(),
            SyntaxKind::Word => self.parse_comparison(),
            _ => self.error_and_bump(DiagnosticKind::UnexpectedToken),
        }

        self.exit_recursion();
    }

    /// `NOT clause`
    fn parse_negation(&mut self) {
        self.start_node(SyntaxKind::Negation);
        self.assert_current(SyntaxKind::Not);
        self.bump();

        if self.currently_is_one_of(CLAUSE_FIRST) {
            self.parse_clause();
        } else {
            self.error_msg(DiagnosticKind::ExpectedCondition, "after `NOT`");
        }

        self.finish_node();
    }

    /// `( clauses )`
    fn parse_group(&mut self) {
        self.start_node(SyntaxKind::Group);
        let open = self.current_span();
        self.bump(); // consume '('

        if self.currently_is(SyntaxKind::RightParen) {
            let close = self.current_span();
            self.error_at(DiagnosticKind::EmptyGroup, open.cover(close));
            self.bump();
        } else {
            self.parse_clauses(true);
            if !self.eat_token(SyntaxKind::RightParen) {
                // Clauses inside a group only stop at `)` or EOF
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedGroup,
                    "reached end of filter",
                    "group started here",
                    open,
                );
            }
        }

        self.finish_node();
    }

    /// `Column Operator Value`
    fn parse_comparison(&mut self) {
        self.start_node(SyntaxKind::Comparison);
        self.bump_remap(SyntaxKind::Column);

        if self.currently_is_one_of(OPERATORS) {
            self.bump_remap(SyntaxKind::Operator);
            self.parse_value();
        } else if self.currently_is(SyntaxKind::Word) {
            // Most likely an operator being typed
            let text = self.current_text();
            self.error_and_bump_msg(
                DiagnosticKind::ExpectedOperator,
                format!("`{text}` is not an operator"),
            );
            if self.currently_is_one_of(SCALAR_VALUES) || self.currently_is(SyntaxKind::LeftParen) {
                self.parse_value();
            }
        } else {
            self.error(DiagnosticKind::ExpectedOperator);
        }

        self.finish_node();
    }

    fn parse_value(&mut self) {
        match self.current() {
            SyntaxKind::Word => self.bump_remap(SyntaxKind::Literal),
            SyntaxKind::String => self.parse_string(),
            SyntaxKind::LeftParen => self.parse_value_list(),
            _ => self.error(DiagnosticKind::ExpectedValue),
        }
    }

    fn parse_string(&mut self) {
        let span = self.current_span();
        let terminated = is_terminated_string(self.current_text());
        self.bump();
        if !terminated {
            self.error_at(DiagnosticKind::UnterminatedString, span);
        }
    }

    /// `( value (, value)* )`
    fn parse_value_list(&mut self) {
        self.start_node(SyntaxKind::ValueList);
        let open = self.current_span();
        self.bump(); // consume '('

        let mut expect_value = true;
        let mut count = 0usize;

        while !self.eof() {
            match self.current() {
                SyntaxKind::RightParen => break,
                SyntaxKind::Word | SyntaxKind::String => {
                    if !expect_value {
                        self.error(DiagnosticKind::ExpectedComma);
                    }
                    if self.currently_is(SyntaxKind::Word) {
                        self.bump_remap(SyntaxKind::Literal);
                    } else {
                        self.parse_string();
                    }
                    expect_value = false;
                    count += 1;
                }
                SyntaxKind::Comma => {
                    if expect_value {
                        self.error(DiagnosticKind::ExpectedValue);
                    }
                    self.bump();
                    expect_value = true;
                }
                kind if VALUE_LIST_RECOVERY.contains(kind) => break,
                _ => self.error_and_bump_msg(
                    DiagnosticKind::UnexpectedToken,
                    "expected a value or `)`",
                ),
            }
        }

        if self.currently_is(SyntaxKind::RightParen) {
            if count == 0 {
                let close = self.current_span();
                self.error_at(DiagnosticKind::EmptyValueList, open.cover(close));
            } else if expect_value {
                self.error(DiagnosticKind::ExpectedValue);
            }
            self.bump();
        } else {
            let found = if self.eof() {
                "reached end of filter".to_string()
            } else {
                format!("found `{}`", self.current_text().to_ascii_uppercase())
            };
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedValueList,
                found,
                "list started here",
                open,
            );
        }

        self.finish_node();
    }
}

fn connective_name(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::And => "AND",
        SyntaxKind::Or => "OR",
        _ => "NOT",
    }
}
