use tiercalc::{
    ast::Expression,
    error::EvalError,
    evaluate,
    interpreter::evaluator::core::Evaluator,
};

fn is_close(x: f64, y: f64) -> bool {
    (x - y).abs() <= 0.001
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!(is_close(value, expected),
                             "Expression: {src}, expected: {expected}, but got: {value}"),
        Err(e) => panic!("Expression: {src}, error not expected, but got: {e}"),
    }
}

fn assert_failure(src: &str, expected: &EvalError) {
    match evaluate(src) {
        Ok(value) => panic!("Expression: {src}, error expected, but got: {value}"),
        Err(e) => assert_eq!(&e, expected, "Expression: {src}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+1", 2.0);
    assert_value("7*9", 63.0);
    assert_value("8-5", 3.0);
    assert_value("10/4", 2.5);
    assert_value("5", 5.0);
    assert_value("0.25", 0.25);
}

#[test]
fn long_flat_expressions_evaluate() {
    assert_value(&format!("{}1", "1+".repeat(99_999)), 100_000.0);
    assert_value(&format!("100000{}", "-1".repeat(100_000)), 0.0);
    assert_value(&format!("1{}", "*1".repeat(100_000)), 1.0);
    assert_value(&format!("({}1)*2", "1+".repeat(99_999)), 200_000.0);
}

#[test]
fn subtraction_and_division_are_left_associative() {
    assert_value("1-2-3", -4.0);
    assert_value("8/2/2", 2.0);
    assert_value("10/4*2", 5.0);
    assert_value("2-3+4", 3.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("1+6/3-2", 1.0);
    assert_value("1-2*3-4", -9.0);
}

#[test]
fn parentheses_group() {
    assert_value("(2+3)*4", 20.0);
    assert_value("(3+3)*7", 42.0);
    assert_value("(3/2)", 1.5);
    assert_value("2*(3+(4-1))", 12.0);
    assert_value("((((7))))", 7.0);
}

#[test]
fn whitespace_is_ignored_everywhere() {
    assert_value("(3- 2)*2* 1+3.5", 5.5);
    assert_value("  1 +\t2\n", 3.0);
    assert_value("3 . 5", 3.5);
    assert_value("1 2 + 3", 15.0);
}

#[test]
fn leading_minus_reads_as_zero_minus() {
    assert_value("-3-2", -5.0);
    assert_value("(-3-2)*2", -10.0);
    assert_value("-2*3", -6.0);
    assert_value("+4", 4.0);
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert_eq!(evaluate("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("0/0").is_ok_and(f64::is_nan));
}

#[test]
fn malformed_literals_evaluate_to_zero() {
    assert_value("1.2.3+1", 1.0);
    assert_value("abc", 0.0);
    assert_value("2*x", 0.0);
    assert_value(".", 0.0);
}

#[test]
fn spliced_results_are_rounded_to_six_places() {
    assert_value("(1/3)*3", 0.999_999);
    assert_eq!(evaluate("(1/3)"), Ok(0.333_333));

    let exact = Evaluator::new().with_splice_precision(None);
    let value = exact.evaluate(&Expression::new("(1/3)*3")).unwrap();
    assert!((value - 1.0).abs() < 1e-12);
}

#[test]
fn unmatched_closing_parenthesis_is_error() {
    assert_failure(")1", &EvalError::UnmatchedClosingParenthesis { position: 0 });
    assert_failure("1)", &EvalError::UnmatchedClosingParenthesis { position: 1 });
    assert_failure("(1+2))", &EvalError::UnmatchedClosingParenthesis { position: 5 });
}

#[test]
fn unclosed_parenthesis_is_error_unless_allowed() {
    assert_failure("(1+2", &EvalError::UnclosedParenthesis { position: 0 });
    assert_failure("2*(3+(4", &EvalError::UnclosedParenthesis { position: 5 });

    let lenient = Evaluator::new().with_allow_unclosed(true);
    assert_eq!(lenient.evaluate(&Expression::new("2*(3")), Ok(3.0));
}

#[test]
fn empty_segments_are_errors() {
    assert_failure("", &EvalError::EmptyExpression);
    assert_failure("   ", &EvalError::EmptyExpression);
    assert_failure("()", &EvalError::EmptyExpression);
    assert_failure("1+()", &EvalError::EmptyExpression);
}

#[test]
fn trace_records_segments_in_evaluation_order() {
    let (value, steps) = Evaluator::new().evaluate_traced(&Expression::new("((1+1)*2)+1"))
                                         .unwrap();

    assert!(is_close(value, 5.0));
    let segments = steps.iter().map(|step| step.segment.as_str()).collect::<Vec<_>>();
    assert_eq!(segments, vec!["1+1", "2.000000*2", "4.000000+1"]);
    assert_eq!(steps[0].tree, "(+ 1 1)");
    assert!(is_close(steps[1].value, 4.0));
}

#[test]
fn trace_shows_empty_operand_of_leading_minus() {
    let (_, steps) = Evaluator::new().evaluate_traced(&Expression::new("-3-2")).unwrap();
    assert_eq!(steps[0].tree, "(- (- \"\" 3) 2)");
}

#[test]
fn traced_and_plain_evaluation_agree() {
    let evaluator = Evaluator::new();
    for src in ["(1+2)*3", "((2))", "-3-2", "1/3+(4*(5-1))", ")1", "(1+2"] {
        let expression = Expression::new(src);
        assert_eq!(evaluator.evaluate(&expression),
                   evaluator.evaluate_traced(&expression).map(|(value, _)| value),
                   "Expression: {src}");
    }
}

#[test]
fn evaluator_is_shareable_between_threads() {
    let evaluator = Evaluator::new();
    std::thread::scope(|scope| {
        let handles = (1..=4).map(|n| {
                                 let evaluator = &evaluator;
                                 scope.spawn(move || {
                                          evaluator.evaluate(&Expression::new(format!("({n}+{n})*{n}")))
                                      })
                             })
                             .collect::<Vec<_>>();

        for (n, handle) in (1..=4).zip(handles) {
            let expected = f64::from(2 * n * n);
            assert_eq!(handle.join().unwrap(), Ok(expected));
        }
    });
}
