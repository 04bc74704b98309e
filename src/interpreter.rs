/// The evaluator module reduces an RPN sequence to a number.
///
/// The evaluator consumes the parser's output from the tail, treating it as
/// a stack, and recursively applies each operation to its operands. It is
/// the final stage of the pipeline.
///
/// # Responsibilities
/// - Reduces an RPN sequence to a single `f64`.
/// - Dispatches on operation variants, applying binary operators and
///   functions with the right operand order.
/// - Reports runtime errors such as a parenthesis marker reaching
///   evaluation.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens, each corresponding to a meaningful element such as a number,
/// an identifier, an operator or a parenthesis. This is the first stage of
/// the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   span.
/// - Handles numeric literals, identifiers, operators and parentheses.
/// - Flags unclassifiable input as illegal tokens.
pub mod lexer;
/// The operation module defines the shared operation values and RPN items.
///
/// This module declares the polymorphic `Operation` type covering binary
/// operators, functions and the structural parenthesis markers, plus the
/// `RpnItem` elements the parser emits and the evaluator consumes.
///
/// # Responsibilities
/// - Defines the `Operation` enum and its dispatch surface.
/// - Defines `RpnItem`, the tagged union of numbers and shared operations.
/// - Provides display labels for diagnostics.
pub mod operation;
/// The parser module converts tokens into Reverse Polish Notation.
///
/// The parser processes the token sequence produced by the lexer and
/// implements the Shunting-Yard algorithm, resolving identifiers through
/// the registry and respecting operator precedence, associativity and
/// function-call grouping.
///
/// # Responsibilities
/// - Converts tokens into an RPN sequence of numbers and operations.
/// - Applies the lookahead-based unary-minus rule.
/// - Reports illegal tokens, unknown identifiers and unknown operators with
///   location info.
pub mod parser;
/// The registry module stores constants and operations by name.
///
/// This module owns the two mappings the parser resolves identifiers
/// against: constant values and shared operations (functions, operators and
/// the parenthesis markers). It validates registrations and pre-populates
/// the default table.
///
/// # Responsibilities
/// - Stores and looks up constants and operations.
/// - Validates registered names and operator symbols.
/// - Builds the default table of built-in constants, functions and
///   operators.
pub mod registry;
