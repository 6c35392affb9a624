use crate::{
    ast::Expression,
    error::EvalError,
    interpreter::{
        evaluator::expr::evaluate_expr,
        lexer::lex,
        parser::core::parse,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default number of decimal places used when a parenthesized result is
/// spliced back into its enclosing text.
pub const SPLICE_PRECISION: usize = 6;

/// How an expression is turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Resolve parentheses innermost first, splicing each result back into
    /// the enclosing text, and evaluate every parenthesis-free segment by
    /// expanding precedence tiers into a tree.
    ///
    /// Negative intermediate results are re-read through the unary minus
    /// rule, so double negation such as `1-(0-2)` or `2*(0-3)` is not
    /// evaluated correctly.
    #[default]
    Splice,
    /// Parse the whole expression with a recursive-descent grammar and
    /// evaluate the typed tree. Unary minus works anywhere and nothing is
    /// lost to decimal rendering.
    Descent,
}

/// One parenthesis-free segment that was reduced to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The segment text as evaluated, whitespace removed.
    pub segment: String,
    /// The expanded tree, as an s-expression.
    pub tree:    String,
    /// The resulting value.
    pub value:   f64,
}

/// Evaluates expressions according to its settings.
///
/// ## Usage
///
/// An `Evaluator` holds no per-evaluation state, so one instance can be
/// reused for any number of expressions, and shared between threads.
///
/// ```
/// use tiercalc::{
///     ast::Expression,
///     interpreter::evaluator::core::{Evaluator, Strategy},
/// };
///
/// let evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate(&Expression::new("(2+3)*4")), Ok(20.0));
///
/// let descent = Evaluator::new().with_strategy(Strategy::Descent);
/// assert_eq!(descent.evaluate(&Expression::new("2*(0-3)")), Ok(-6.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    /// Which pipeline evaluates the expression.
    pub strategy:         Strategy,
    /// Decimal places for spliced results, or `None` for the shortest text
    /// that reads back as the same number. Only used by
    /// [`Strategy::Splice`].
    pub splice_precision: Option<usize>,
    /// Evaluate the innermost open group instead of failing when input ends
    /// with a `(` still open. Only used by [`Strategy::Splice`].
    pub allow_unclosed:   bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator using the splice strategy, six decimal places
    /// and strict parenthesis checking.
    #[must_use]
    pub const fn new() -> Self {
        Self { strategy:         Strategy::Splice,
               splice_precision: Some(SPLICE_PRECISION),
               allow_unclosed:   false, }
    }

    /// Sets which pipeline evaluates expressions.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the decimal places for spliced results, `None` for round-trip.
    #[must_use]
    pub const fn with_splice_precision(mut self, precision: Option<usize>) -> Self {
        self.splice_precision = precision;
        self
    }

    /// Sets whether an unclosed `(` is tolerated by the splice strategy.
    #[must_use]
    pub const fn with_allow_unclosed(mut self, allow: bool) -> Self {
        self.allow_unclosed = allow;
        self
    }

    /// Evaluates an expression to a number.
    ///
    /// # Errors
    /// Returns an [`EvalError`] for unbalanced parentheses, empty segments,
    /// and, with [`Strategy::Descent`], syntax errors. Malformed literals are
    /// not errors; they evaluate to zero.
    pub fn evaluate(&self, expression: &Expression) -> EvalResult<f64> {
        self.run(expression, None)
    }

    /// Evaluates an expression and records every segment reduction.
    ///
    /// With [`Strategy::Splice`] there is one [`Reduction`] per closed group
    /// plus one for the outermost segment, in evaluation order. With
    /// [`Strategy::Descent`] there is a single reduction for the whole
    /// expression.
    ///
    /// # Example
    /// ```
    /// use tiercalc::{ast::Expression, interpreter::evaluator::core::Evaluator};
    ///
    /// let (value, steps) = Evaluator::new().evaluate_traced(&Expression::new("(1+2)*3"))
    ///                                      .unwrap();
    /// assert_eq!(value, 9.0);
    /// assert_eq!(steps.len(), 2);
    /// assert_eq!(steps[0].segment, "1+2");
    /// assert_eq!(steps[1].segment, "3.000000*3");
    /// assert_eq!(steps[1].tree, "(* 3.000000 3)");
    /// ```
    pub fn evaluate_traced(&self, expression: &Expression) -> EvalResult<(f64, Vec<Reduction>)> {
        let mut steps = Vec::new();
        let value = self.run(expression, Some(&mut steps))?;
        Ok((value, steps))
    }

    /// Evaluates with the configured strategy, recording reductions into
    /// `steps` when given.
    fn run(&self,
           expression: &Expression,
           steps: Option<&mut Vec<Reduction>>)
           -> EvalResult<f64> {
        let tokens = lex(expression.as_str());

        match self.strategy {
            Strategy::Splice => self.resolve(&tokens, steps),
            Strategy::Descent => {
                let expr = parse(&tokens)?;
                let value = evaluate_expr(&expr);
                if let Some(steps) = steps {
                    let segment = tokens.iter().map(|(token, _)| token.as_str()).collect();
                    steps.push(Reduction { segment,
                                           tree: expr.to_string(),
                                           value });
                }
                Ok(value)
            },
        }
    }

    /// Renders a group result for splicing into the enclosing segment.
    pub(crate) fn render(&self, value: f64) -> String {
        match self.splice_precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        }
    }
}
