//! Arithmetic evaluation and answer formatting.
//!
//! Arity rules (a missing operand counts as 0):
//!
//! ```text
//!              0 operands   1 operand   2+ operands
//! Sum          0            a           a + b + ...
//! Product      0            a * 2       a * b
//! Quotient     0            a           a / b      (b == 0 -> DivisionByZero)
//! Difference   0            a           a - b
//! ```
//!
//! Operands past the second are ignored by every operation except `Sum`.

use crate::{Degradation, Operand, Operation};

/// Answer returned whenever no usable number can be produced.
pub const FALLBACK_ANSWER: &str = "0.00";

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// Local fallback applied to reach `value`, if any.
    pub degradation: Option<Degradation>,
}

/// Apply `operation` to `operands`.
///
/// The only `Err` is [`Degradation::DivisionByZero`]; callers map it to
/// [`FALLBACK_ANSWER`].
pub(crate) fn evaluate(operation: Operation, operands: &[Operand]) -> Result<Evaluation, Degradation> {
    let values: Vec<f64> = operands.iter().map(|op| op.value).collect();
    let short = Degradation::InsufficientArity { operation, found: values.len() };

    let (value, degradation) = match (operation, values.as_slice()) {
        (_, []) => (0.0, Some(Degradation::NoOperandsFound)),
        (Operation::Sum, all) => (all.iter().sum::<f64>(), None),
        (Operation::Product, &[a]) => (a * 2.0, Some(short)),
        (Operation::Quotient | Operation::Difference, &[a]) => (a, Some(short)),
        (Operation::Product, &[a, b, ..]) => (a * b, None),
        (Operation::Quotient, &[_, b, ..]) if b == 0.0 => return Err(Degradation::DivisionByZero),
        (Operation::Quotient, &[a, b, ..]) => (a / b, None),
        (Operation::Difference, &[a, b, ..]) => (a - b, None),
    };

    Ok(Evaluation { value, degradation })
}

/// Format `value` with exactly two fraction digits.
///
/// Returns `None` for non-finite values. Negative zero prints as `0.00`.
pub fn format_answer(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" { Some(FALLBACK_ANSWER.to_string()) } else { Some(formatted) }
}
