use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::tree::evaluate_constant,
        lexer::Token,
        parser::core::{MAX_NESTING, ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// A leading `-` negates its operand and a leading `+` is dropped. Signs
/// nest, so `--3` is `3`. Each sign counts as one nesting level.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Minus | Token::Plus, position)) if depth >= MAX_NESTING => {
            Err(EvalError::NestingTooDeep { position: *position })
        },
        Some((Token::Minus, position)) => {
            let position = *position;
            tokens.next();
            let expr = parse_unary(tokens, depth + 1)?;
            Ok(Expr::Negate { expr: Box::new(expr),
                              position })
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            parse_unary(tokens, depth + 1)
        },
        _ => parse_primary(tokens, depth),
    }
}

/// Parses a primary expression: a numeric literal or a parenthesized group.
///
/// Grammar:
/// ```text
///     primary := number+
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - [`EvalError::UnexpectedToken`] for an operator, `)` or unknown text
///   where an operand should start.
/// - [`EvalError::UnexpectedEndOfInput`] if the tokens run out.
/// - [`EvalError::NestingTooDeep`] for a `(` at [`MAX_NESTING`] levels.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(text), position)) => Ok(parse_literal(tokens, text, *position)),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position, depth),
        Some((token, position)) => {
            Err(EvalError::UnexpectedToken { token:    token.as_str().to_owned(),
                                             position: *position, })
        },
        None => Err(EvalError::UnexpectedEndOfInput),
    }
}

/// Joins consecutive number tokens into one literal.
///
/// The lexer splits `3 . 5` into three runs because of the whitespace; the
/// literal is the concatenation, `3.5`. Text that still is not a number
/// evaluates to zero.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>, first: &str, position: usize) -> Expr
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut text = first.to_owned();
    while let Some((Token::Number(next), _)) = tokens.peek() {
        text.push_str(next);
        tokens.next();
    }

    Expr::Literal { value: evaluate_constant(&text),
                    position }
}

/// Parses the inside of `( ... )`, the opening parenthesis already consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open: usize,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth >= MAX_NESTING {
        return Err(EvalError::NestingTooDeep { position: open });
    }

    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((token, position)) => {
            Err(EvalError::UnexpectedToken { token:    token.as_str().to_owned(),
                                             position: *position, })
        },
        None => Err(EvalError::UnclosedParenthesis { position: open }),
    }
}
