use std::mem;

use crate::{
    ast::{HIGH_PRECEDENCE, LOW_PRECEDENCE},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, Reduction},
            tree::evaluate_ast,
        },
        lexer::Token,
        parser::{build::build_ast, expand::expand_leaves},
    },
    util::stack::Stack,
};

/// The text of an enclosing group, saved while a nested group is collected.
struct Frame {
    buffer: String,
    /// Offset of the `(` that opened the nested group.
    open:   usize,
}

impl Evaluator {
    /// Resolves parentheses innermost first and evaluates what remains.
    ///
    /// A `(` saves the current buffer and starts an empty one. A `)`
    /// evaluates the current buffer as a parenthesis-free segment and
    /// appends the rendered value to the saved buffer, which becomes current
    /// again. Every other token is appended as text. At the end the buffer
    /// holds a single parenthesis-free segment, which gives the result.
    /// Each evaluated segment is recorded into `steps`, if given.
    ///
    /// # Errors
    /// - [`EvalError::UnmatchedClosingParenthesis`] for a `)` with nothing
    ///   open.
    /// - [`EvalError::UnclosedParenthesis`] if a `(` is still open at the
    ///   end, unless `allow_unclosed` is set. In that case the innermost
    ///   group is evaluated and the enclosing text is discarded.
    /// - [`EvalError::EmptyExpression`] for empty segments, e.g. `()`.
    pub(crate) fn resolve(&self,
                          tokens: &[(Token, usize)],
                          mut steps: Option<&mut Vec<Reduction>>)
                          -> EvalResult<f64> {
        let mut saved = Stack::new();
        let mut current = String::new();

        for (token, position) in tokens {
            match token {
                Token::LParen => saved.push(Frame { buffer: mem::take(&mut current),
                                                    open:   *position, }),
                Token::RParen => {
                    let frame = saved.pop().map_err(|_| {
                                               EvalError::UnmatchedClosingParenthesis { position:
                                                                                            *position }
                                           })?;
                    let value = evaluate_segment(&current, steps.as_deref_mut())?;
                    current = frame.buffer;
                    current.push_str(&self.render(value));
                },
                other => current.push_str(other.as_str()),
            }
        }

        if let Ok(frame) = saved.peek()
           && !self.allow_unclosed
        {
            return Err(EvalError::UnclosedParenthesis { position: frame.open });
        }

        evaluate_segment(&current, steps)
    }
}

/// Evaluates a parenthesis-free segment.
///
/// The segment starts out as a single leaf. Expanding the leaves by the low
/// tier and then the high tier gives a tree whose post-order evaluation
/// respects precedence.
///
/// # Errors
/// [`EvalError::EmptyExpression`] if the segment is empty.
pub(crate) fn evaluate_segment(segment: &str,
                               steps: Option<&mut Vec<Reduction>>)
                               -> EvalResult<f64> {
    if segment.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut ast = build_ast(&[segment.to_owned()])?;
    expand_leaves(&mut ast, &LOW_PRECEDENCE)?;
    expand_leaves(&mut ast, &HIGH_PRECEDENCE)?;

    let value = evaluate_ast(&ast)?;
    if let Some(steps) = steps {
        steps.push(Reduction { segment: segment.to_owned(),
                               tree: ast.to_string(),
                               value });
    }

    Ok(value)
}
