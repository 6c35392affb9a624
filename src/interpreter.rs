/// The evaluator module turns parsed expressions into numbers.
///
/// It owns the [`Evaluator`](evaluator::core::Evaluator) and its settings,
/// the parenthesis resolver of the splice strategy, and the post-order
/// evaluation of both kinds of tree.
///
/// # Responsibilities
/// - Resolves parentheses and splices nested results back as text.
/// - Reduces expanded trees to a single `f64`.
/// - Reports structural errors such as unbalanced parentheses.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces numeric runs, operators,
/// parentheses and unknown runs, each with its byte offset. Whitespace is
/// dropped.
///
/// # Responsibilities
/// - Classifies every character of the input.
/// - Never fails; unrecognised text is kept for later stages.
pub mod lexer;
/// The parser module builds syntax trees.
///
/// For the splice strategy it splits text by operator tier, builds
/// left-associative trees and expands their leaves tier by tier. For the
/// descent strategy it parses tokens with a precedence-climbing grammar.
///
/// # Responsibilities
/// - Keeps tokenization lossless.
/// - Encodes precedence and left associativity in the shape of the tree.
pub mod parser;
