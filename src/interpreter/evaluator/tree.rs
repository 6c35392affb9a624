use crate::{
    ast::{ALL_OPERATORS, Ast, Operator},
    interpreter::evaluator::{binary::reduce, core::EvalResult},
    util::stack::Stack,
};

enum Visit<'a> {
    /// Evaluate a subtree, leaving its value on the value stack.
    Enter(&'a Ast),
    /// Fold the values of this node's children, which are on top.
    Fold(&'a Ast),
}

/// Evaluates a fully expanded syntax tree in post order.
///
/// Leaves are numeric literals, see [`evaluate_constant`]. Inner nodes
/// evaluate all of their children first and then fold them with their
/// operator. The walk uses an explicit stack, as a long flat segment builds
/// a tree as deep as it has operators.
///
/// # Errors
/// [`EvalError::Arity`](crate::error::EvalError::Arity) if an inner node has
/// fewer than two children.
///
/// # Panics
/// If an inner node carries anything other than `+`, `-`, `*` or `/`. The
/// expander only ever creates nodes for those characters.
///
/// # Example
/// ```
/// use tiercalc::{interpreter::evaluator::tree::evaluate_ast, util::tree::Node};
///
/// let ast = Node::new("*".to_string(),
///                     vec![Node::leaf("6".to_string()), Node::leaf("7".to_string())]);
/// assert_eq!(evaluate_ast(&ast), Ok(42.0));
/// ```
pub fn evaluate_ast(ast: &Ast) -> EvalResult<f64> {
    let mut pending = Stack::new();
    let mut values = Vec::new();
    pending.push(Visit::Enter(ast));

    while let Ok(visit) = pending.pop() {
        match visit {
            Visit::Enter(node) if node.is_leaf() => {
                debug_assert!(!node.data.chars().any(|c| ALL_OPERATORS.contains(&c)),
                              "leaf '{}' was not fully expanded",
                              node.data);
                values.push(evaluate_constant(&node.data));
            },
            Visit::Enter(node) => {
                pending.push(Visit::Fold(node));
                for child in node.children.iter().rev() {
                    pending.push(Visit::Enter(child));
                }
            },
            Visit::Fold(node) => {
                let operands = values.split_off(values.len() - node.children.len());
                let Some(op) = node.data.chars().next().and_then(Operator::from_symbol) else {
                    unreachable!("unhandled operation: {}", node.data);
                };
                values.push(reduce(op, &operands)?);
            },
        }
    }

    let Some(value) = values.pop() else {
        unreachable!("evaluation left no value");
    };
    Ok(value)
}

/// Converts leaf text into a number.
///
/// Anything that does not parse as a floating-point literal, including the
/// empty operand left of a leading `-`, evaluates to zero.
///
/// # Example
/// ```
/// use tiercalc::interpreter::evaluator::tree::evaluate_constant;
///
/// assert_eq!(evaluate_constant("3.5"), 3.5);
/// assert_eq!(evaluate_constant(""), 0.0);
/// assert_eq!(evaluate_constant("1.2.3"), 0.0);
/// ```
#[must_use]
pub fn evaluate_constant(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
