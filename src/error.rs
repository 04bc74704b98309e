/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing an
/// expression. Parse errors include illegal tokens, unknown identifiers and
/// unknown operators, each carrying the offending token text and its source
/// span.
pub mod parse_error;
/// Registration errors.
///
/// Contains the error types raised when a constant, function or operator is
/// registered under an invalid name or symbol.
pub mod registry_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing an RPN
/// sequence, such as a stray parenthesis marker reaching evaluation or the
/// recursion limit being exceeded.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use registry_error::RegistryError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any failure a full evaluation can produce.
///
/// `compute` runs the parser and the evaluator in sequence; this enum is the
/// sum of both failure domains, so callers get one typed error to match on.
pub enum Error {
    /// The expression could not be scanned or parsed.
    Parse(ParseError),
    /// The RPN sequence could not be reduced to a number.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
