use std::{fmt, mem};

use once_cell::sync::Lazy;

use crate::util::{set::Set, tree::Node};

/// An arithmetic expression as typed by the user.
///
/// Only digits, `.`, the operators `+ - * /`, parentheses and whitespace are
/// meaningful. Construction performs no validation; malformed text is only
/// noticed, if at all, while evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression(String);

impl Expression {
    /// Wraps the given text. Never fails.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The expression text, exactly as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Expression {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Expression {
    fn from(source: String) -> Self {
        Self(source)
    }
}

impl Expr {
    /// Moves the boxed operands into `into`, leaving zero literals behind.
    fn detach_operands(&mut self, into: &mut Vec<Self>) {
        let hole = || Self::Literal { value:    0.0,
                                      position: 0, };
        match self {
            Self::Literal { .. } => {},
            Self::Negate { expr, .. } => into.push(mem::replace(expr.as_mut(), hole())),
            Self::BinaryOp { left, right, .. } => {
                into.push(mem::replace(left.as_mut(), hole()));
                into.push(mem::replace(right.as_mut(), hole()));
            },
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_operands(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_operands(&mut pending);
        }
    }
}

enum Piece<'a> {
    Node(&'a Expr),
    Text(&'static str),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::Negate { expr, .. }) => {
                    f.write_str("(neg ")?;
                    pending.extend([Piece::Text(")"), Piece::Node(expr)]);
                },
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    write!(f, "({op} ")?;
                    pending.extend([Piece::Text(")"),
                                    Piece::Node(right),
                                    Piece::Text(" "),
                                    Piece::Node(left)]);
                },
            }
        }

        Ok(())
    }
}
