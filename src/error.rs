//! Degradations the solver absorbs instead of failing.
//!
//! None of these ever escape the public API as an `Err`: each one is resolved
//! to an answer locally and then recorded on the [`Solution`](crate::Solution)
//! so callers can decide whether to consult a fallback solver.

use crate::Operation;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Degradation {
    /// No number word was recognized; every operand defaulted to 0.
    #[error("no number words recognized")]
    NoOperandsFound,
    /// A two-operand operation ran with fewer operands than it needs.
    #[error("{operation} expects two operands, found {found}")]
    InsufficientArity { operation: Operation, found: usize },
    /// Quotient with a zero-valued divisor; answered with the fallback literal.
    #[error("division by zero")]
    DivisionByZero,
}
