use crate::{ast::Operator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Applies an operator to two values.
///
/// Uses native floating-point semantics throughout. In particular dividing
/// by zero gives an infinity or NaN, never an error.
///
/// # Example
/// ```
/// use tiercalc::{ast::Operator, interpreter::evaluator::binary::apply};
///
/// assert_eq!(apply(Operator::Sub, 1.0, 3.0), -2.0);
/// assert_eq!(apply(Operator::Div, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn apply(op: Operator, left: f64, right: f64) -> f64 {
    match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => left / right,
    }
}

/// Folds `values` from the left with `op`.
///
/// # Errors
/// [`EvalError::Arity`] if fewer than two values are given.
///
/// # Example
/// ```
/// use tiercalc::{ast::Operator, interpreter::evaluator::binary::reduce};
///
/// assert_eq!(reduce(Operator::Sub, &[10.0, 3.0, 2.0]), Ok(5.0));
/// assert!(reduce(Operator::Add, &[1.0]).is_err());
/// ```
pub fn reduce(op: Operator, values: &[f64]) -> EvalResult<f64> {
    match values {
        [first, second, rest @ ..] => {
            Ok(rest.iter()
                   .fold(apply(op, *first, *second), |acc, value| apply(op, acc, *value)))
        },
        _ => Err(EvalError::Arity { operator: op,
                                    found:    values.len(), }),
    }
}
