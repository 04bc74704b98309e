#[derive(Debug)]
/// Represents all errors that can occur while registering an entry.
///
/// Registration never fails on duplicates (the last registration wins);
/// these errors only report name and symbol shapes the registry rejects.
pub enum RegistryError {
    /// A constant name does not start with an ASCII alphabetic character.
    InvalidConstantName {
        /// The rejected name.
        name: String,
    },
    /// A function name does not start with an ASCII alphabetic character.
    InvalidFunctionName {
        /// The rejected name.
        name: String,
    },
    /// An operator symbol is not exactly one special character.
    InvalidOperatorSymbol {
        /// The rejected symbol.
        symbol:  String,
        /// Details describing why the symbol is invalid.
        details: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConstantName { name } => write!(f,
                                                         "\"{name}\" is not a valid constant name: must start with an alphabetic character."),
            Self::InvalidFunctionName { name } => write!(f,
                                                         "\"{name}\" is not a valid function name: must start with an alphabetic character."),
            Self::InvalidOperatorSymbol { symbol, details } => {
                write!(f, "\"{symbol}\" is not a valid operator: {details}.")
            },
        }
    }
}

impl std::error::Error for RegistryError {}
