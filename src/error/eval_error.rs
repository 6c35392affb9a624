use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Positions are byte offsets into the original expression text.
pub enum EvalError {
    /// A `)` was found with no open `(` to match it.
    UnmatchedClosingParenthesis {
        /// Offset of the offending `)`.
        position: usize,
    },
    /// Input ended while a `(` was still open.
    UnclosedParenthesis {
        /// Offset of the innermost unclosed `(`.
        position: usize,
    },
    /// A parenthesis-free segment with nothing in it reached the evaluator,
    /// e.g. `""` or `"()"`.
    EmptyExpression,
    /// A token sequence that does not alternate operand, operator, operand.
    MalformedTokens {
        /// Length of the rejected sequence. Always zero or even.
        count: usize,
    },
    /// A binary operator was folded over too few values.
    Arity {
        /// The operator being applied.
        operator: Operator,
        /// How many values were available.
        found:    usize,
    },
    /// The descent parser found a token it did not expect.
    UnexpectedToken {
        /// The token text.
        token:    String,
        /// Offset of the token.
        position: usize,
    },
    /// The descent parser ran out of tokens mid-expression.
    UnexpectedEndOfInput,
    /// Groups and unary signs in the descent parser nest deeper than
    /// [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING).
    NestingTooDeep {
        /// Offset of the `(` or sign that went one level too deep.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClosingParenthesis { position } => write!(f,
                                                                     "Error at position {position}: Closing parenthesis ')' has no matching '('."),
            Self::UnclosedParenthesis { position } => write!(f,
                                                             "Error at position {position}: Opening parenthesis '(' is never closed."),
            Self::EmptyExpression => write!(f, "Error: Cannot evaluate an empty expression."),
            Self::MalformedTokens { count } => write!(f,
                                                      "Error: Expected an odd number of alternating tokens, found {count}."),
            Self::Arity { operator, found } => write!(f,
                                                      "Error: Operator '{operator}' needs at least 2 values, found {found}."),
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),
            Self::NestingTooDeep { position } => {
                write!(f, "Error at position {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
