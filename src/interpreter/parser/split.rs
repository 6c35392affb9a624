use crate::ast::Tier;

/// Splits text into alternating operand and operator tokens.
///
/// Every character of `text` that belongs to `tier` becomes a one-character
/// token of its own; the characters between them are collected into operand
/// tokens. The result always has odd length, starts and ends with an operand,
/// and concatenates back to exactly `text`.
///
/// A leading operator produces an empty first operand. Empty operands
/// evaluate to zero, which is how `-3` comes to mean `0 - 3`. Nothing is
/// validated here.
///
/// # Parameters
/// - `text`: A parenthesis-free segment, or part of one.
/// - `tier`: The operator characters to split on.
///
/// # Returns
/// The token sequence.
///
/// # Example
/// ```
/// use tiercalc::{ast::LOW_PRECEDENCE, interpreter::parser::split::split_by_tier};
///
/// assert_eq!(split_by_tier("-3+2*4", &LOW_PRECEDENCE), vec!["", "-", "3", "+", "2*4"]);
/// assert_eq!(split_by_tier("2*4", &LOW_PRECEDENCE), vec!["2*4"]);
/// ```
#[must_use]
pub fn split_by_tier(text: &str, tier: &Tier) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut operand = String::new();

    for symbol in text.chars() {
        if tier.contains(&symbol) {
            tokens.push(std::mem::take(&mut operand));
            tokens.push(symbol.to_string());
            continue;
        }
        operand.push(symbol);
    }
    tokens.push(operand);

    tokens
}
