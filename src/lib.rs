#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{
    AnswerSource, FallbackSolver, Options, SolveDetails, Solution, SolutionVerbose, StageTiming, extract_answer,
    solve, solve_verbose_with, solve_with, solve_with_fallback,
};
pub use engine::{Classification, FALLBACK_ANSWER};
pub use error::Degradation;
pub use rules::operation::keywords::FamilyMask;

// --- Shared types -----------------------------------------------------------

/// Arithmetic operation a challenge asks for.
///
/// Exactly one is selected per challenge; `Sum` is the default when no
/// keyword family matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    #[default]
    Sum,
    Product,
    Quotient,
    Difference,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Product => "product",
            Operation::Quotient => "quotient",
            Operation::Difference => "difference",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Token span inside the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Index of the first token (inclusive).
    pub start: usize,
    /// Index past the last token (exclusive).
    pub end: usize,
}

/// A number recovered from one number word or a merged pair of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub value: f64,
    /// Tokens of the normalized text that produced this operand.
    pub range: Range,
    /// The matched words, in order (one or two entries).
    pub words: Vec<String>,
}
