use crate::{
    ast::Ast,
    error::EvalError,
    interpreter::parser::core::ParseResult,
    util::tree::Node,
};

/// Builds a left-associative tree from an alternating token sequence.
///
/// The first operand becomes a leaf. Each following `(operator, operand)`
/// pair wraps the tree built so far as the left child of a new node, with a
/// fresh leaf for the operand on the right. The root therefore holds the
/// last operator, and a post-order walk reduces strictly left to right:
/// `1-2-3` becomes `(1-2)-3`.
///
/// # Parameters
/// - `tokens`: Operand, operator, operand, ... as produced by
///   [`split_by_tier`](crate::interpreter::parser::split::split_by_tier).
///
/// # Returns
/// The root of the new tree. A single token yields a lone leaf.
///
/// # Errors
/// [`EvalError::MalformedTokens`] if the sequence is empty or of even
/// length.
///
/// # Example
/// ```
/// use tiercalc::interpreter::parser::build::build_ast;
///
/// let tokens = ["1", "-", "2", "-", "3"].map(String::from);
/// let ast = build_ast(&tokens).unwrap();
///
/// assert_eq!(ast.data, "-");
/// assert_eq!(ast.to_string(), "(- (- 1 2) 3)");
/// ```
pub fn build_ast(tokens: &[String]) -> ParseResult<Ast> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(EvalError::MalformedTokens { count: 0 });
    };
    if rest.len() % 2 != 0 {
        return Err(EvalError::MalformedTokens { count: tokens.len() });
    }

    let mut root = Node::leaf(first.clone());
    for pair in rest.chunks_exact(2) {
        let (operator, operand) = (&pair[0], &pair[1]);
        root = Node::new(operator.clone(), vec![root, Node::leaf(operand.clone())]);
    }

    Ok(root)
}
