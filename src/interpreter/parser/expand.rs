use crate::{
    ast::{Ast, Tier},
    interpreter::parser::{build::build_ast, core::ParseResult, split::split_by_tier},
    util::stack::Stack,
};

/// Replaces every leaf of `ast` with the tree of its own text split by
/// `tier`.
///
/// Leaves are visited with an explicit stack; visiting order does not affect
/// the result. When `ast` itself is a leaf the whole tree is replaced.
///
/// Running this for the low tier and then the high tier places every `*`
/// and `/` node below the `+` and `-` nodes around it, so a post-order
/// evaluation applies the usual precedence without any precedence table.
/// Calling it in the other order inverts precedence.
///
/// # Parameters
/// - `ast`: The tree to expand in place.
/// - `tier`: Operator characters to split leaf text on.
///
/// # Errors
/// Propagates [`build_ast`] errors, which cannot occur for sequences
/// produced by [`split_by_tier`].
///
/// # Example
/// ```
/// use tiercalc::{
///     ast::{HIGH_PRECEDENCE, LOW_PRECEDENCE},
///     interpreter::parser::expand::expand_leaves,
///     util::tree::Node,
/// };
///
/// let mut ast = Node::leaf("2+3*4".to_string());
/// expand_leaves(&mut ast, &LOW_PRECEDENCE).unwrap();
/// assert_eq!(ast.to_string(), "(+ 2 3*4)");
///
/// expand_leaves(&mut ast, &HIGH_PRECEDENCE).unwrap();
/// assert_eq!(ast.to_string(), "(+ 2 (* 3 4))");
/// ```
pub fn expand_leaves(ast: &mut Ast, tier: &Tier) -> ParseResult<()> {
    let mut pending = Stack::new();
    pending.push(ast);

    while let Ok(node) = pending.pop() {
        if node.is_leaf() {
            let tokens = split_by_tier(&node.data, tier);
            *node = build_ast(&tokens)?;
            continue;
        }

        for child in &mut node.children {
            pending.push(child);
        }
    }

    Ok(())
}
