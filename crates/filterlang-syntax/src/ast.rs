//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Accessors return `None` for parts the user has not typed yet.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};
use super::lexer::{is_terminated_string, unescape, unquote};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Filter, Filter);
ast_node!(Comparison, Comparison);
ast_node!(Group, Group);
ast_node!(Negation, Negation);
ast_node!(ValueList, ValueList);

/// Anything that can stand between two connectives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    Comparison(Comparison),
    Group(Group),
    Negation(Negation),
}

impl Clause {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Comparison => Comparison::cast(node).map(Clause::Comparison),
            SyntaxKind::Group => Group::cast(node).map(Clause::Group),
            SyntaxKind::Negation => Negation::cast(node).map(Clause::Negation),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Clause::Comparison(n) => n.as_cst(),
            Clause::Group(n) => n.as_cst(),
            Clause::Negation(n) => n.as_cst(),
        }
    }
}

/// Connective joining two clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn as_str(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Bare word such as `1000` or `10.0.0.0/8`
    Literal(SyntaxToken),
    /// Quoted string, possibly still missing its closing quote
    String(SyntaxToken),
    List(ValueList),
}

impl Value {
    fn from_token(token: SyntaxToken) -> Option<Self> {
        match token.kind() {
            SyntaxKind::Literal => Some(Value::Literal(token)),
            SyntaxKind::String => Some(Value::String(token)),
            _ => None,
        }
    }

    /// Value text with quotes and escapes removed. `None` for lists.
    pub fn text(&self) -> Option<String> {
        match self {
            Value::Literal(t) => Some(t.text().to_string()),
            Value::String(t) => Some(unescape(unquote(t.text())).into_owned()),
            Value::List(_) => None,
        }
    }
}

fn clauses(node: &SyntaxNode) -> impl Iterator<Item = Clause> + '_ {
    node.children().filter_map(Clause::cast)
}

fn connectives(node: &SyntaxNode) -> impl Iterator<Item = Connective> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter_map(|t| match t.kind() {
            SyntaxKind::And => Some(Connective::And),
            SyntaxKind::Or => Some(Connective::Or),
            _ => None,
        })
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

impl Filter {
    pub fn clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        clauses(&self.0)
    }

    pub fn connectives(&self) -> impl Iterator<Item = Connective> + '_ {
        connectives(&self.0)
    }
}

impl Comparison {
    pub fn column(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Column)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Operator)
    }

    pub fn value(&self) -> Option<Value> {
        self.0.children_with_tokens().find_map(|it| match it {
            rowan::NodeOrToken::Node(n) => ValueList::cast(n).map(Value::List),
            rowan::NodeOrToken::Token(t) => Value::from_token(t),
        })
    }

    /// Column, operator and value are all present and the value is well-formed.
    pub fn is_complete(&self) -> bool {
        if self.column().is_none() || self.operator().is_none() {
            return false;
        }
        match self.value() {
            Some(Value::Literal(_)) => true,
            Some(Value::String(t)) => is_terminated_string(t.text()),
            Some(Value::List(list)) => list.is_closed(),
            None => false,
        }
    }
}

impl Group {
    pub fn clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        clauses(&self.0)
    }

    pub fn connectives(&self) -> impl Iterator<Item = Connective> + '_ {
        connectives(&self.0)
    }

    pub fn is_closed(&self) -> bool {
        token(&self.0, SyntaxKind::RightParen).is_some()
    }
}

impl Negation {
    pub fn clause(&self) -> Option<Clause> {
        self.0.children().find_map(Clause::cast)
    }
}

impl ValueList {
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter_map(Value::from_token)
    }

    pub fn is_closed(&self) -> bool {
        token(&self.0, SyntaxKind::RightParen).is_some()
    }

    /// The comparison this list is the value of.
    pub fn comparison(&self) -> Option<Comparison> {
        self.0.parent().and_then(Comparison::cast)
    }
}
