/// Hash-backed set.
///
/// Used to describe an operator tier: the characters that share one
/// precedence level. Supports membership tests and union, which is all the
/// evaluation pipeline needs.
pub mod set;
/// Vector-backed LIFO stack.
///
/// Holds the outer buffers while a parenthesized sub-expression is being
/// collected, and drives the iterative leaf traversal of the expander.
/// Popping or peeking an empty stack reports [`crate::error::StackError`].
pub mod stack;
/// Generic n-ary tree node.
///
/// Each node owns its payload and an ordered list of children. The
/// evaluation pipeline uses `Node<String>` as its syntax tree.
pub mod tree;
