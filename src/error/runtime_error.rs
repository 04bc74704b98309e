#[derive(Debug)]
/// Represents all errors that can occur while reducing an RPN sequence.
pub enum RuntimeError {
    /// The evaluator popped an RPN element that is neither a number, an
    /// operator nor a function. A parenthesis marker reaching evaluation
    /// signals an unbalanced expression or a stack-discipline bug.
    UnsupportedType {
        /// The display label of the offending operation.
        symbol: String,
    },
    /// The recursive reduction exceeded the configured depth limit.
    RecursionLimitExceeded {
        /// The depth limit that was exceeded.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType { symbol } => {
                write!(f, "Cannot compute \"{symbol}\": unsupported type in computation.")
            },
            Self::RecursionLimitExceeded { limit } => write!(f,
                                                             "Recursion limit of {limit} exceeded while reducing the expression."),
        }
    }
}

impl std::error::Error for RuntimeError {}
