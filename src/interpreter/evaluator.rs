/// Core evaluation logic and configuration.
///
/// Contains the [`Evaluator`](core::Evaluator) with its settings, the
/// evaluation strategies, and the reduction records used for tracing.
pub mod core;

/// Binary operator evaluation.
///
/// Applies the four arithmetic operators and folds value lists with them.
pub mod binary;

/// Syntax tree evaluation.
///
/// Reduces a fully expanded tree to a number in post order, and turns leaf
/// text into numbers.
pub mod tree;

/// Parenthesis resolution.
///
/// Walks the expression once, evaluating each parenthesized group as soon as
/// it closes and splicing the result back into the enclosing text.
pub mod resolve;

/// Typed expression evaluation.
///
/// Evaluates the trees built by the recursive-descent strategy.
pub mod expr;
