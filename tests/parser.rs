use calcyard::{ParseError, Parser, Registry, RpnItem};

/// Renders an RPN sequence as labels, numbers formatted like `1` or `-3`.
fn shape(rpn: &[RpnItem]) -> Vec<String> {
    rpn.iter()
       .map(|item| match item {
           RpnItem::Number(n) => n.to_string(),
           RpnItem::Operation(op) => op.label(),
       })
       .collect()
}

fn parse(source: &str) -> Vec<String> {
    let registry = Registry::new();
    shape(&Parser::parse(&registry, source).unwrap())
}

#[test]
fn numbers_and_operators_come_out_postfix() {
    assert_eq!(parse("1 + 2 * 3"), ["1", "2", "3", "*", "+"]);
    assert_eq!(parse("234 + 2 - 1"), ["234", "2", "+", "1", "-"]);
}

#[test]
fn parenthesized_groups_reduce_before_the_surrounding_operator() {
    assert_eq!(parse("(1 + 3) * (5 + 2)"), ["1", "3", "+", "5", "2", "+", "*"]);
    assert_eq!(parse("(1 + 3) * 5 + 2"), ["1", "3", "+", "5", "*", "2", "+"]);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(parse("2 ^ 3 ^ 2"), ["2", "3", "2", "^", "^"]);
    assert_eq!(parse("2 - 3 - 2"), ["2", "3", "-", "2", "-"]);
}

#[test]
fn a_function_attaches_to_its_closed_argument_group() {
    assert_eq!(parse("sqrt(4)"), ["4", "sqrt"]);
    assert_eq!(parse("log2((8 + 3) * sqrt(4))"),
               ["8", "3", "+", "4", "sqrt", "*", "log2"]);
}

#[test]
fn constants_resolve_to_their_values_at_parse_time() {
    let registry = Registry::new();
    let rpn = Parser::parse(&registry, "PI").unwrap();

    assert!(matches!(rpn[0], RpnItem::Number(n) if n == std::f64::consts::PI));
}

#[test]
fn leading_minus_folds_into_a_negative_literal() {
    assert_eq!(parse("-1 -1 * -3"), ["-1", "1", "-3", "*", "-"]);
    assert_eq!(parse("5 * -9"), ["5", "-9", "*"]);
}

#[test]
fn minus_after_a_number_stays_binary() {
    assert_eq!(parse("5 - 9"), ["5", "9", "-"]);
    assert_eq!(parse("5 - -9"), ["5", "-9", "-"]);
}

#[test]
fn unknown_identifiers_are_rejected_with_their_span() {
    let registry = Registry::new();
    let err = Parser::parse(&registry, "1 + q").unwrap_err();

    match err {
        ParseError::UnknownIdentifier { text, start, end } => {
            assert_eq!(text, "q");
            assert_eq!(start, 4);
            assert_eq!(end, 5);
        },
        other => panic!("expected UnknownIdentifier, got {other:?}"),
    }
}

#[test]
fn unknown_operators_are_rejected_with_their_span() {
    let registry = Registry::new();
    let err = Parser::parse(&registry, "1 ? 2").unwrap_err();

    match err {
        ParseError::UnknownOperator { text, start, end } => {
            assert_eq!(text, "?");
            assert_eq!(start, 2);
            assert_eq!(end, 3);
        },
        other => panic!("expected UnknownOperator, got {other:?}"),
    }
}

#[test]
fn illegal_tokens_abort_the_parse() {
    let registry = Registry::new();
    let err = Parser::parse(&registry, "1 + π").unwrap_err();

    assert!(matches!(err, ParseError::InvalidToken { .. }));
}

#[test]
fn an_unmatched_right_parenthesis_drains_the_stack_silently() {
    // Known looseness, preserved: the extra `)` is ignored.
    assert_eq!(parse("1 + 2)"), ["1", "2", "+"]);
}

#[test]
fn an_unmatched_left_marker_leaks_into_the_output() {
    // The evaluator rejects the marker; the parser just drains it.
    assert_eq!(parse("(1 + 2"), ["1", "2", "+", "("]);
}

#[test]
fn parsing_an_empty_expression_yields_an_empty_sequence() {
    let registry = Registry::new();

    assert!(Parser::parse(&registry, "").unwrap().is_empty());
}
