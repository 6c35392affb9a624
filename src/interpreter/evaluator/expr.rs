use crate::{
    ast::{Expr, Operator},
    interpreter::evaluator::binary::apply,
    util::stack::Stack,
};

enum Visit<'a> {
    Enter(&'a Expr),
    Negate,
    Apply(Operator),
}

/// Evaluates a tree built by the recursive-descent strategy.
///
/// Evaluation cannot fail: every structural problem was already reported by
/// the parser, and arithmetic follows native floating-point semantics.
///
/// # Example
/// ```
/// use tiercalc::interpreter::{evaluator::expr::evaluate_expr, lexer::lex, parser::core::parse};
///
/// let expr = parse(&lex("(-3-2)*-2")).unwrap();
/// assert_eq!(evaluate_expr(&expr), 10.0);
/// ```
#[must_use]
pub fn evaluate_expr(expr: &Expr) -> f64 {
    let mut pending = Stack::new();
    let mut values: Vec<f64> = Vec::new();
    pending.push(Visit::Enter(expr));

    while let Ok(visit) = pending.pop() {
        match visit {
            Visit::Enter(Expr::Literal { value, .. }) => values.push(*value),
            Visit::Enter(Expr::Negate { expr, .. }) => {
                pending.push(Visit::Negate);
                pending.push(Visit::Enter(expr));
            },
            Visit::Enter(Expr::BinaryOp { left, op, right, .. }) => {
                pending.push(Visit::Apply(*op));
                pending.push(Visit::Enter(right));
                pending.push(Visit::Enter(left));
            },
            Visit::Negate => {
                if let Some(value) = values.last_mut() {
                    *value = -*value;
                }
            },
            Visit::Apply(op) => {
                if let (Some(right), Some(left)) = (values.pop(), values.pop()) {
                    values.push(apply(op, left, right));
                }
            },
        }
    }

    let Some(value) = values.pop() else {
        unreachable!("evaluation left no value");
    };
    value
}
