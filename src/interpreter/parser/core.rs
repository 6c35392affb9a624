use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, EvalError>;

/// How many groups and unary signs may enclose one another.
///
/// Every level is a few nested calls, so this bounds the stack used by the
/// descent however the input is shaped.
pub const MAX_NESTING: usize = 256;

/// Parses a full expression.
///
/// This is the entry point of the recursive descent. It begins at the
/// lowest-precedence level, addition, and descends from there.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: Number of groups and signs enclosing this expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Parses a complete token list into a single expression.
///
/// Unlike [`parse_expression`], every token must be consumed.
///
/// # Errors
/// - [`EvalError::EmptyExpression`] if there are no tokens at all.
/// - [`EvalError::UnexpectedToken`] for leftover tokens, such as an
///   unmatched `)`.
/// - [`EvalError::NestingTooDeep`] past [`MAX_NESTING`] levels.
/// - Any error from the grammar rules.
///
/// # Example
/// ```
/// use tiercalc::interpreter::{lexer::lex, parser::core::parse};
///
/// let expr = parse(&lex("2 * -3 + 1")).unwrap();
/// assert_eq!(expr.to_string(), "(+ (* 2 (neg 3)) 1)");
///
/// assert!(parse(&lex("1)")).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        None => Ok(expr),
        Some((token, position)) => Err(EvalError::UnexpectedToken { token:    token.as_str()
                                                                                   .to_owned(),
                                                                    position: *position, }),
    }
}
