use std::rc::Rc;

/// Signature of a binary operator implementation.
pub type BinaryFn = Box<dyn Fn(f64, f64) -> f64>;
/// Signature of a function implementation.
///
/// Functions receive their arguments as a slice; the evaluator always
/// supplies exactly one element, so variadic built-ins degrade to their
/// single-argument behavior.
pub type VariadicFn = Box<dyn Fn(&[f64]) -> f64>;

/// Tie-break rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Groups left-to-right: `a - b - c` is `(a - b) - c`.
    Left,
    /// Groups right-to-left: `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// A polymorphic operation shared through the registry.
///
/// Operations are immutable and shared as [`Rc`] values; what the parser
/// pushes into its output is the shared identity, so the evaluator
/// dispatches by variant instead of re-resolving a symbol.
pub enum Operation {
    /// A binary operator such as `+` or `^`.
    Operator {
        /// The single-character symbol, kept for diagnostics.
        symbol:        char,
        /// Binding strength; higher binds tighter.
        precedence:    u32,
        /// Tie-break rule against operators of equal precedence.
        associativity: Associativity,
        /// The operator implementation, applied as `apply(left, right)`.
        apply:         BinaryFn,
    },
    /// A named function such as `sqrt`, attached to the parenthesized
    /// group that follows it.
    Function {
        /// The function name, kept for diagnostics.
        name:  String,
        /// The function implementation.
        apply: VariadicFn,
    },
    /// A parenthesis marker. Never applied; its presence on the operator
    /// stack is purely structural, and one reaching the evaluator is an
    /// invariant violation.
    Parenthesis {
        /// `true` for `(`, `false` for `)`.
        left: bool,
    },
}

impl Operation {
    /// Returns the operation's display label: the operator symbol, the
    /// function name, or the parenthesis character.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Operator { symbol, .. } => symbol.to_string(),
            Self::Function { name, .. } => name.clone(),
            Self::Parenthesis { left: true } => "(".to_string(),
            Self::Parenthesis { left: false } => ")".to_string(),
        }
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator { symbol,
                             precedence,
                             associativity,
                             .. } => f.debug_struct("Operator")
                                      .field("symbol", symbol)
                                      .field("precedence", precedence)
                                      .field("associativity", associativity)
                                      .finish_non_exhaustive(),
            Self::Function { name, .. } => {
                f.debug_struct("Function").field("name", name).finish_non_exhaustive()
            },
            Self::Parenthesis { left } => {
                f.debug_struct("Parenthesis").field("left", left).finish()
            },
        }
    }
}

/// One element of a finished RPN sequence.
///
/// Parenthesis markers must never appear in finished output; the evaluator
/// treats one as an unsupported type.
#[derive(Debug, Clone)]
pub enum RpnItem {
    /// A plain number, either a literal or a resolved constant.
    Number(f64),
    /// A reference to a shared operator or function.
    Operation(Rc<Operation>),
}
