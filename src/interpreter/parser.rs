/// Entry points and shared types for parsing.
///
/// Defines the parse result alias and the top-level function of the
/// recursive-descent strategy.
pub mod core;

/// Tier splitting.
///
/// Splits operand text on the characters of one operator tier, keeping every
/// character so the tokens join back into the original text.
pub mod split;

/// Left-associative tree construction.
///
/// Turns an alternating operand/operator token sequence into a binary tree
/// whose post-order walk reduces left to right.
pub mod build;

/// Leaf expansion.
///
/// Rewrites every leaf of a tree into the tree of its own text split by a
/// tier. Applying it once per tier, lowest first, encodes precedence in the
/// shape of the tree.
pub mod expand;

/// Binary operator parsing for the recursive-descent strategy.
///
/// Parses the additive and multiplicative levels of the grammar.
pub mod binary;

/// Unary and primary parsing for the recursive-descent strategy.
///
/// Handles prefix signs, numeric literals and parenthesized groups.
pub mod unary;
