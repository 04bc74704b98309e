use crate::{
    error::RuntimeError,
    interpreter::operation::{Operation, RpnItem},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum reduction depth before evaluation is aborted.
///
/// The reduction recurses once per pending operand, so the depth is
/// bounded by the length of the RPN sequence. The limit turns an
/// adversarially long expression into a reportable error instead of a
/// call-stack overflow.
pub const RECURSION_LIMIT: usize = 8 * 1024;

/// Reduces an RPN sequence to a single number.
///
/// The sequence is consumed from its end, treated as a stack. A binary
/// operator reduces the rest of the sequence twice, right operand first;
/// a function reduces it once for its single argument; a plain number is
/// returned as-is. An empty sequence reduces to `0`, which also serves as
/// the recursion base case.
///
/// # Errors
/// - `UnsupportedType` if a parenthesis marker reaches evaluation.
/// - `RecursionLimitExceeded` if the reduction nests deeper than
///   [`RECURSION_LIMIT`].
///
/// # Example
/// ```
/// use calcyard::{Parser, Registry, evaluate};
///
/// let registry = Registry::new();
/// let mut rpn = Parser::parse(&registry, "2 ^ 3 ^ 2").unwrap();
///
/// assert_eq!(evaluate(&mut rpn).unwrap(), 512.0);
/// assert_eq!(evaluate(&mut Vec::new()).unwrap(), 0.0);
/// ```
pub fn evaluate(rpn: &mut Vec<RpnItem>) -> EvalResult<f64> {
    reduce(rpn, 0)
}

fn reduce(rpn: &mut Vec<RpnItem>, depth: usize) -> EvalResult<f64> {
    if depth >= RECURSION_LIMIT {
        return Err(RuntimeError::RecursionLimitExceeded { limit: RECURSION_LIMIT });
    }

    let Some(item) = rpn.pop() else {
        return Ok(0.0);
    };

    match item {
        RpnItem::Number(value) => Ok(value),
        RpnItem::Operation(operation) => match operation.as_ref() {
            Operation::Operator { apply, .. } => {
                // Consumed back-to-front: the right operand pops first.
                let right = reduce(rpn, depth + 1)?;
                let left = reduce(rpn, depth + 1)?;
                Ok(apply(left, right))
            },
            Operation::Function { apply, .. } => {
                let argument = reduce(rpn, depth + 1)?;
                Ok(apply(&[argument]))
            },
            Operation::Parenthesis { .. } => {
                Err(RuntimeError::UnsupportedType { symbol: operation.label() })
            },
        },
    }
}
