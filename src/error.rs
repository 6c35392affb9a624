/// Evaluation errors.
///
/// Defines every failure that can end an evaluation: unbalanced parentheses,
/// empty segments, malformed token sequences, arity violations, and the
/// syntax errors reported by the recursive-descent strategy. Malformed
/// numeric literals are deliberately absent; they evaluate to zero.
pub mod eval_error;
/// Stack errors.
///
/// Reported by [`crate::util::stack::Stack`] when popping or peeking an
/// empty stack. The resolver maps this into an [`EvalError`].
pub mod stack_error;

pub use eval_error::EvalError;
pub use stack_error::StackError;
