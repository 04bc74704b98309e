//! # calcyard
//!
//! calcyard is a small arithmetic expression evaluator written in Rust.
//! It scans an expression into tokens, converts the tokens into Reverse
//! Polish Notation with the Shunting-Yard algorithm, and reduces the RPN
//! sequence to a single `f64`. Constants, functions and binary operators
//! live in a registry that callers can extend at runtime.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while turning an
/// expression into a result, as well as the errors produced by invalid
/// registrations. It standardizes error reporting and carries the offending
/// token text together with its source span for user-facing diagnostics.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, registry).
/// - Attaches source spans and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and the operation
/// registry to provide a complete pipeline from raw text to a numeric
/// result. It exposes the public API for evaluating expressions and for
/// registering new constants, functions and operators.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and registry.
/// - Provides entry points for scanning, parsing and computing expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::{Error, ParseError, RegistryError, RuntimeError},
    interpreter::{
        evaluator::evaluate,
        lexer::{Position, Token, TokenKind, scan},
        operation::{Associativity, Operation, RpnItem},
        parser::Parser,
        registry::Registry,
    },
};

/// Computes the numeric value of an arithmetic expression.
///
/// The expression is evaluated against a fresh default [`Registry`], so all
/// built-in constants, functions and operators are available. To evaluate
/// against an extended registry, use [`Registry::compute`] instead.
///
/// # Errors
/// Returns an error if the expression contains an illegal token, an unknown
/// identifier or an unknown operator, or if the RPN sequence cannot be
/// reduced to a number.
///
/// # Examples
/// ```
/// use calcyard::compute;
///
/// // Operator precedence is respected: multiplication binds tighter.
/// let result = compute("1 + 2 * 3").unwrap();
/// assert_eq!(result, 7.0);
///
/// // Example with an intentional error (unknown identifier).
/// let result = compute("1 + q"); // 'q' is not defined
/// assert!(result.is_err());
/// ```
pub fn compute(expression: &str) -> Result<f64, Error> {
    Registry::new().compute(expression)
}
