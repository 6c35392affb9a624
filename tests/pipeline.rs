use tiercalc::{
    ast::{ALL_OPERATORS, HIGH_PRECEDENCE, LOW_PRECEDENCE, Operator},
    error::{EvalError, StackError},
    interpreter::{
        evaluator::tree::evaluate_ast,
        lexer::{Token, lex},
        parser::{build::build_ast, expand::expand_leaves, split::split_by_tier},
    },
    util::{set::Set, stack::Stack, tree::Node},
};

fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

#[test]
fn tiers_partition_the_operators() {
    for symbol in ['+', '-', '*', '/'] {
        assert!(ALL_OPERATORS.contains(&symbol));
        assert_ne!(LOW_PRECEDENCE.contains(&symbol), HIGH_PRECEDENCE.contains(&symbol));
        assert!(Operator::from_symbol(symbol).is_some_and(|op| op.symbol() == symbol));
    }
    assert_eq!(ALL_OPERATORS.len(), 4);
    assert!(!ALL_OPERATORS.contains(&'^'));
}

#[test]
fn split_keeps_empty_operands() {
    assert_eq!(split_by_tier("", &LOW_PRECEDENCE), tokens(&[""]));
    assert_eq!(split_by_tier("-", &LOW_PRECEDENCE), tokens(&["", "-", ""]));
    assert_eq!(split_by_tier("1--2", &LOW_PRECEDENCE), tokens(&["1", "-", "", "-", "2"]));
    assert_eq!(split_by_tier("6/3*2", &HIGH_PRECEDENCE), tokens(&["6", "/", "3", "*", "2"]));
}

#[test]
fn build_rejects_malformed_sequences() {
    assert_eq!(build_ast(&[]), Err(EvalError::MalformedTokens { count: 0 }));
    assert_eq!(build_ast(&tokens(&["1", "+"])), Err(EvalError::MalformedTokens { count: 2 }));
}

#[test]
fn build_single_token_is_a_leaf() {
    let ast = build_ast(&tokens(&["4*2"])).unwrap();
    assert!(ast.is_leaf());
    assert_eq!(ast.data, "4*2");
}

#[test]
fn build_puts_last_operator_at_the_root() {
    let ast = build_ast(&tokens(&["8", "/", "4", "*", "2"])).unwrap();
    assert_eq!(ast.data, "*");
    assert_eq!(ast.children[0].to_string(), "(/ 8 4)");
    assert_eq!(ast.children[1], Node::leaf("2".to_string()));
}

#[test]
fn expanding_a_root_leaf_replaces_the_tree() {
    let mut ast = Node::leaf("1+2".to_string());
    expand_leaves(&mut ast, &LOW_PRECEDENCE).unwrap();
    assert_eq!(ast.data, "+");
    assert_eq!(ast.leaves(), vec!["1", "2"]);
}

#[test]
fn expanding_without_matching_operators_keeps_leaves() {
    let mut ast = Node::leaf("7".to_string());
    expand_leaves(&mut ast, &HIGH_PRECEDENCE).unwrap();
    assert_eq!(ast, Node::leaf("7".to_string()));
}

#[test]
fn expansion_order_decides_precedence() {
    let mut usual = Node::leaf("2+3*4".to_string());
    expand_leaves(&mut usual, &LOW_PRECEDENCE).unwrap();
    expand_leaves(&mut usual, &HIGH_PRECEDENCE).unwrap();
    assert_eq!(usual.to_string(), "(+ 2 (* 3 4))");
    assert_eq!(evaluate_ast(&usual), Ok(14.0));

    let mut inverted = Node::leaf("2+3*4".to_string());
    expand_leaves(&mut inverted, &HIGH_PRECEDENCE).unwrap();
    expand_leaves(&mut inverted, &LOW_PRECEDENCE).unwrap();
    assert_eq!(inverted.to_string(), "(* (+ 2 3) 4)");
    assert_eq!(evaluate_ast(&inverted), Ok(20.0));
}

#[test]
fn evaluate_ast_checks_arity() {
    let ast = Node::new("+".to_string(), vec![Node::leaf("1".to_string())]);
    assert_eq!(evaluate_ast(&ast),
               Err(EvalError::Arity { operator: Operator::Add,
                                      found:    1, }));
}

#[test]
#[should_panic(expected = "unhandled operation")]
fn evaluate_ast_rejects_unknown_operators() {
    let ast = Node::new("^".to_string(),
                        vec![Node::leaf("2".to_string()), Node::leaf("3".to_string())]);
    let _ = evaluate_ast(&ast);
}

#[test]
fn lexer_keeps_unknown_text_and_skips_whitespace() {
    assert_eq!(lex(" 2 x\u{a0}*y"),
               vec![(Token::Number("2".to_string()), 1),
                    (Token::Unknown("x".to_string()), 3),
                    (Token::Star, 6),
                    (Token::Unknown("y".to_string()), 7)]);
    assert!(lex(" \t\n").is_empty());
}

#[test]
fn set_union_and_membership() {
    let mut digits = Set::from_elements(['1', '2']);
    let more = Set::from_elements(['2', '3']);
    let all = digits.union(&more);

    assert_eq!(all, Set::from_elements(['1', '2', '3']));
    assert!(digits.insert('9'));
    assert!(!digits.insert('9'));
    assert!(digits.remove(&'1'));
    assert!(!digits.contains(&'1'));
    assert_eq!(Set::from_elements(['x']).to_string(), "{x}");
    assert!(Set::<char>::new().is_empty());
}

#[test]
fn stack_is_last_in_first_out() {
    let mut stack = Stack::from(vec![1, 2]);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.peek(), Ok(&1));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), Err(StackError::Empty));
}

#[test]
fn node_replace_child_in_place() {
    let mut tree = Node::new("+", vec![Node::leaf("1"), Node::leaf("2")]);
    let old = tree.replace_child(1, Node::new("*", vec![Node::leaf("3"), Node::leaf("4")]));

    assert_eq!(old, Some(Node::leaf("2")));
    assert_eq!(tree.to_string(), "(+ 1 (* 3 4))");
    assert_eq!(tree.replace_child(5, Node::leaf("9")), None);
}

#[test]
fn deep_node_renders_and_drops() {
    let depth = 100_000;
    let mut tree = Node::leaf("0".to_string());
    for _ in 0..depth {
        tree = Node::new("-".to_string(), vec![tree, Node::leaf("1".to_string())]);
    }

    assert_eq!(tree.leaves().len(), depth + 1);
    assert_eq!(evaluate_ast(&tree), Ok(-100_000.0));

    let rendered = tree.to_string();
    assert!(rendered.starts_with("(- (- (- "));
    assert!(rendered.ends_with(" 1) 1)"));
    assert_eq!(rendered.matches('(').count(), depth);
}

