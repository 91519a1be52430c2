use crate::engine::{self, Classification, RunResult};
use crate::{Degradation, Operand, Operation};
use std::time::Duration;
use tracing::{info, warn};

/// Options that affect normalization.
///
/// Everything else about the engine is fixed; these exist for diagnostics.
#[derive(Debug, Clone)]
pub struct Options {
    /// Run the targeted number-word repair pass after generic de-noising.
    pub repair_number_words: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { repair_number_words: true }
    }
}

/// Where the final answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// The heuristic engine in this crate.
    Engine,
    /// A caller-supplied [`FallbackSolver`].
    Fallback,
}

/// Result from [`solve_with`] and [`solve_with_fallback`].
#[derive(Debug, Clone)]
pub struct Solution {
    /// The challenge as given.
    pub challenge: String,
    /// Two-decimal answer text, e.g. `"48.00"`.
    pub answer: String,
    /// Numeric value of `answer`.
    pub value: f64,
    /// Operation picked by the classifier.
    pub operation: Operation,
    /// Operands extracted from the normalized text.
    pub operands: Vec<Operand>,
    /// Local fallback the engine applied, if any.
    pub degradation: Option<Degradation>,
    pub source: AnswerSource,
    /// Total time spent in the engine.
    pub elapsed: Duration,
}

impl Solution {
    /// False when the engine had nothing to compute with (no operands, or a
    /// zero divisor) and `answer` is just the fallback literal.
    ///
    /// A single-operand fallback (`double seven` -> 14) still counts as usable.
    pub fn is_usable(&self) -> bool {
        !matches!(self.degradation, Some(Degradation::NoOperandsFound | Degradation::DivisionByZero))
            || self.source == AnswerSource::Fallback
    }
}

/// Time spent in one engine stage.
#[derive(Debug, Clone)]
pub struct StageTiming {
    pub stage: &'static str,
    pub duration: Duration,
}

/// Extra details returned by [`solve_verbose_with`].
#[derive(Debug, Clone)]
pub struct SolveDetails {
    /// Challenge after all normalization passes.
    pub normalized: String,
    /// Operation plus every keyword family that matched.
    pub classification: Classification,
    /// Total elapsed time.
    pub total: Duration,
    /// Per-stage timings, in pipeline order.
    pub stages: Vec<StageTiming>,
}

/// Result from [`solve_verbose_with`].
#[derive(Debug, Clone)]
pub struct SolutionVerbose {
    pub solution: Solution,
    pub details: SolveDetails,
}

/// An alternative solver consulted when the engine's answer is unusable.
///
/// The reply is free-form text; the first number in it is taken as the
/// answer (see [`extract_answer`]). Return `None` when the solver could not
/// produce anything (network failure, timeout, refusal...).
pub trait FallbackSolver {
    fn solve(&self, challenge: &str) -> Option<String>;
}

impl<F> FallbackSolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn solve(&self, challenge: &str) -> Option<String> {
        self(challenge)
    }
}

/// Solve `challenge` and return only the two-decimal answer.
///
/// Never fails: unusable input yields `"0.00"`.
///
/// # Example
/// ```
/// assert_eq!(mathgate::solve("what is the product of twelve and four"), "48.00");
/// assert_eq!(mathgate::solve("nothing to see here"), "0.00");
/// ```
pub fn solve(challenge: &str) -> String {
    engine::Pipeline::new(challenge, &Options::default()).run().answer
}

/// Solve `challenge` with `options`, returning the answer with its operands,
/// operation and any degradation.
pub fn solve_with(challenge: &str, options: &Options) -> Solution {
    let run = engine::Pipeline::new(challenge, options).run_with_metrics();
    run_to_solution(challenge, run)
}

/// Solve `challenge` and also return the normalized text, the full
/// classification and per-stage timings.
pub fn solve_verbose_with(challenge: &str, options: &Options) -> SolutionVerbose {
    let run = engine::Pipeline::new(challenge, options).run_with_metrics();

    let metrics = &run.metrics;
    let stages = vec![
        StageTiming { stage: "normalize", duration: metrics.normalize },
        StageTiming { stage: "extract", duration: metrics.extract },
        StageTiming { stage: "classify", duration: metrics.classify },
        StageTiming { stage: "evaluate", duration: metrics.evaluate },
    ];
    let details = SolveDetails {
        normalized: run.normalized.clone(),
        classification: run.classification.clone(),
        total: metrics.total,
        stages,
    };

    SolutionVerbose { solution: run_to_solution(challenge, run), details }
}

/// Solve `challenge`, handing it to `fallback` when the engine's answer is
/// not usable (see [`Solution::is_usable`]).
///
/// The fallback's reply replaces the engine answer only if a number can be
/// extracted from it; otherwise the engine answer stands.
pub fn solve_with_fallback(challenge: &str, options: &Options, fallback: &impl FallbackSolver) -> Solution {
    let mut solution = solve_with(challenge, options);
    if solution.is_usable() {
        return solution;
    }

    let Some(reply) = fallback.solve(challenge) else {
        warn!(target: "mathgate", degradation = ?solution.degradation, "fallback solver gave no reply");
        return solution;
    };

    match parse_reply(&reply) {
        Some((value, answer)) => {
            info!(target: "mathgate", %answer, "using fallback solver answer");
            solution.answer = answer;
            solution.value = value;
            solution.source = AnswerSource::Fallback;
        }
        None => warn!(target: "mathgate", reply = %reply, "fallback reply has no number"),
    }

    solution
}

/// Pull the first decimal number out of free-form text and format it with two
/// fraction digits.
///
/// ```
/// assert_eq!(mathgate::extract_answer("The answer is 42.5."), Some("42.50".to_string()));
/// assert_eq!(mathgate::extract_answer("no idea"), None);
/// ```
pub fn extract_answer(reply: &str) -> Option<String> {
    parse_reply(reply).map(|(_, answer)| answer)
}

fn parse_reply(reply: &str) -> Option<(f64, String)> {
    let m = regex!(r"-?\d+(?:\.\d+)?").find(reply)?;
    let value = m.as_str().parse::<f64>().ok()?;
    let answer = engine::format_answer(value)?;
    Some((value, answer))
}

fn run_to_solution(challenge: &str, run: RunResult) -> Solution {
    let degradation = run.degradation();
    let value = run.value();

    Solution {
        challenge: challenge.to_string(),
        answer: run.answer,
        value,
        operation: run.classification.operation,
        operands: run.operands,
        degradation,
        source: AnswerSource::Engine,
        elapsed: run.metrics.total,
    }
}
