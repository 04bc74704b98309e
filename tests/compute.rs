use std::f64::consts;

use calcyard::{Associativity, Error, ParseError, Registry, RegistryError, RuntimeError, compute,
               evaluate};

#[test]
fn addition_and_subtraction_group_left_to_right() {
    assert_eq!(compute("234 + 2 - 1").unwrap(), 235.0);
    assert_eq!(compute("234 - 2 + 1").unwrap(), 233.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(compute("1 + 2 * 3").unwrap(), 7.0);
    assert_eq!(compute("1 / 4").unwrap(), 0.25);
}

#[test]
fn exponentiation_groups_right_to_left() {
    assert_eq!(compute("2 ^ 3 ^ 2").unwrap(), 512.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(compute("(1 + 3) * 5 + 2").unwrap(), 22.0);
    assert_eq!(compute("5 * (3 - 1)").unwrap(), 10.0);
}

#[test]
fn unary_minus_folds_into_the_literal() {
    assert_eq!(compute("5 * -9").unwrap(), -45.0);
    assert_eq!(compute("5 - -9").unwrap(), 14.0);
    assert_eq!(compute("-1 -1 * -3").unwrap(), 2.0);
}

#[test]
fn constants_are_resolved_from_the_registry() {
    assert_eq!(compute("PI").unwrap(), consts::PI);
    assert_eq!(compute("e").unwrap(), consts::E);
    assert_eq!(compute("E").unwrap(), consts::E);

    let result = compute("998786556 * PI / 6796 + E").unwrap();
    assert!((result - 461_712.622_171_447_4).abs() < 1e-9);
}

#[test]
fn builtin_functions_apply_to_their_group() {
    assert_eq!(compute("sqrt(4)").unwrap(), 2.0);
    assert_eq!(compute("log2(8)").unwrap(), 3.0);
    assert_eq!(compute("pow2(9)").unwrap(), 81.0);
    assert_eq!(compute("pow10(2)").unwrap(), 100.0);
    assert_eq!(compute("log2((8 + 3) * sqrt(4))").unwrap(), 22f64.log2());
}

#[test]
fn log10_keeps_its_natural_log_binding() {
    // Historical table compatibility: log10 is the natural log.
    assert_eq!(compute("log10(100)").unwrap(), 100f64.ln());
    assert_eq!(compute("log(100)").unwrap(), 100f64.ln());
}

#[test]
fn factorial_is_one_at_and_below_zero() {
    assert_eq!(compute("fac(5)").unwrap(), 120.0);
    assert_eq!(compute("fac(0)").unwrap(), 1.0);
    assert_eq!(compute("fac(-3)").unwrap(), 1.0);
}

#[test]
fn variadic_builtins_degrade_to_one_argument() {
    assert_eq!(compute("max(5)").unwrap(), 5.0);
    assert_eq!(compute("min(3)").unwrap(), 3.0);
}

#[test]
fn empty_input_computes_to_zero() {
    assert_eq!(compute("").unwrap(), 0.0);
    assert_eq!(evaluate(&mut Vec::new()).unwrap(), 0.0);
}

#[test]
fn later_registrations_overwrite_earlier_ones() {
    let mut registry = Registry::new();

    registry.register_constant("x", 1.0).unwrap();
    registry.register_constant("x", 2.0).unwrap();
    assert_eq!(registry.compute("x").unwrap(), 2.0);

    registry.register_func("sqrt", |args| args.first().copied().unwrap_or(f64::NAN))
            .unwrap();
    assert_eq!(registry.compute("sqrt(4)").unwrap(), 4.0);

    registry.register_operator("+", 1, |a, b| a * b, Associativity::Left)
            .unwrap();
    assert_eq!(registry.compute("2 + 3").unwrap(), 6.0);
}

#[test]
fn custom_operators_join_the_precedence_table() {
    let mut registry = Registry::new();
    registry.register_operator("%", 10, |a, b| a % b, Associativity::Left)
            .unwrap();

    assert_eq!(registry.compute("7 % 4").unwrap(), 3.0);
    assert_eq!(registry.compute("1 + 7 % 4").unwrap(), 4.0);
}

#[test]
fn an_unknown_identifier_aborts_the_computation() {
    let err = compute("1 + q").unwrap_err();

    assert!(matches!(err, Error::Parse(ParseError::UnknownIdentifier { .. })));
}

#[test]
fn registration_rejects_malformed_names_and_symbols() {
    let mut registry = Registry::new();

    let err = registry.register_operator("ab", 1, |a, _| a, Associativity::Left)
                      .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidOperatorSymbol { .. }));

    let err = registry.register_operator("a", 1, |a, _| a, Associativity::Left)
                      .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidOperatorSymbol { .. }));

    assert!(matches!(registry.register_constant("2pi", 6.28),
                     Err(RegistryError::InvalidConstantName { .. })));
    assert!(matches!(registry.register_func("9lives", |_| 9.0),
                     Err(RegistryError::InvalidFunctionName { .. })));
}

#[test]
fn an_unmatched_left_parenthesis_fails_at_evaluation() {
    let err = compute("(1 + 2").unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::UnsupportedType { .. })));
}

#[test]
fn an_unmatched_right_parenthesis_is_tolerated() {
    // Known looseness, preserved for compatibility.
    assert_eq!(compute("1 + 2)").unwrap(), 3.0);
}

#[test]
fn an_isolated_registry_starts_blank() {
    let registry = Registry::empty();
    let err = registry.compute("1 + 1").unwrap_err();

    assert!(matches!(err, Error::Parse(ParseError::UnknownOperator { .. })));
}
