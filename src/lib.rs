//! # tiercalc
//!
//! tiercalc evaluates arithmetic expressions made of decimal literals, the
//! operators `+ - * /`, parentheses and whitespace.
//!
//! Parentheses are resolved innermost first. Each parenthesis-free segment
//! starts as a single leaf which is split by the low precedence tier
//! (`+ -`) and then by the high tier (`* /`); because the high tier is
//! expanded last its operators sit deeper in the tree and are evaluated
//! first.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expression,
    error::EvalError,
    interpreter::evaluator::core::Evaluator,
};

/// Defines the data that flows through evaluation.
///
/// This module declares the [`Expression`] input type, the [`Operator`]
/// enum, the two precedence tiers and the tree types built from them.
///
/// # Responsibilities
/// - Holds the operator tiers as immutable, lazily initialised statics.
/// - Defines the text tree used by the splice strategy and the typed tree
///   used by the descent strategy.
///
/// [`Operator`]: ast::Operator
pub mod ast;
/// Provides error types for evaluation.
///
/// Every failure is reported through [`EvalError`], returned from the
/// top-level evaluation call. Nothing aborts the process.
///
/// # Responsibilities
/// - Defines error enums for all structural failures.
/// - Attaches source offsets where one exists.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the tree builders and the evaluators.
/// - Provides the configurable [`Evaluator`].
pub mod interpreter;
/// Generic containers used by the pipeline: a set, a stack and a tree node.
pub mod util;

/// Evaluates an expression with the default settings.
///
/// # Errors
/// Returns an error for unbalanced parentheses or an empty expression.
///
/// # Examples
/// ```
/// use tiercalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("1 - 2 - 3"), Ok(-4.0));
///
/// // A closing parenthesis with nothing to close.
/// assert!(evaluate(")1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(&Expression::new(source))
}
