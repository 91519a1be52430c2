//! Stage driver.
//!
//! ```text
//! challenge ── normalize ──┬── extract_operands ──┐
//!                          └── classify ──────────┴── evaluate ── format_answer
//! ```
//!
//! `run` is the plain path. `run_with_metrics` does the same work and also
//! times each stage. Either way the output is deterministic for a given input
//! and `Options`.
//!
//! ## Tracing
//!
//! Each stage emits a `debug` event under the `mathgate` target; the extracted
//! operands are emitted at `info` as `Numbers: [..]`. That line is diagnostic
//! only and is never part of the answer.

use super::classify::classify;
use super::evaluate::{FALLBACK_ANSWER, evaluate, format_answer};
use super::extract::extract_operands;
use super::metrics::{RunResult, SolveMetrics};
use super::normalize::normalize;
use crate::{Degradation, Operand, Options};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Pipeline<'a> {
    challenge: &'a str,
    options: &'a Options,
}

impl<'a> Pipeline<'a> {
    pub fn new(challenge: &'a str, options: &'a Options) -> Self {
        Pipeline { challenge, options }
    }

    pub fn run(&self) -> RunResult {
        self.execute(false)
    }

    pub fn run_with_metrics(&self) -> RunResult {
        self.execute(true)
    }

    fn execute(&self, timed: bool) -> RunResult {
        let mut metrics = SolveMetrics::default();
        let started = Instant::now();
        let mut stage = Instant::now();
        let mut lap = |slot: &mut std::time::Duration| {
            if timed {
                *slot = stage.elapsed();
                stage = Instant::now();
            }
        };

        let normalized = normalize(self.challenge, self.options.repair_number_words);
        lap(&mut metrics.normalize);
        debug!(target: "mathgate", normalized = %normalized, "normalized challenge");

        let operands = extract_operands(&normalized);
        lap(&mut metrics.extract);
        info!(target: "mathgate", "Numbers: {}", numbers_line(&operands));

        let classification = classify(&normalized);
        lap(&mut metrics.classify);
        debug!(
            target: "mathgate",
            operation = %classification.operation,
            keywords = ?classification.keywords,
            "classified operation"
        );

        let evaluation = evaluate(classification.operation, &operands);
        let answer = match &evaluation {
            Ok(eval) => format_answer(eval.value).unwrap_or_else(|| FALLBACK_ANSWER.to_string()),
            Err(_) => FALLBACK_ANSWER.to_string(),
        };
        lap(&mut metrics.evaluate);

        match &evaluation {
            Ok(eval) => debug!(target: "mathgate", value = eval.value, degradation = ?eval.degradation, %answer, "evaluated"),
            Err(err) => debug!(target: "mathgate", error = %err, %answer, "evaluation failed, using fallback answer"),
        }

        if timed {
            metrics.total = started.elapsed();
        }

        RunResult { normalized, operands, classification, evaluation, answer, metrics }
    }
}

impl RunResult {
    /// The degradation applied during this run, including a failed evaluation.
    pub fn degradation(&self) -> Option<Degradation> {
        match &self.evaluation {
            Ok(eval) => eval.degradation,
            Err(err) => Some(*err),
        }
    }

    /// Numeric value behind `answer` (0 when the fallback literal was used).
    pub fn value(&self) -> f64 {
        match &self.evaluation {
            Ok(eval) if eval.value.is_finite() => eval.value,
            _ => 0.0,
        }
    }
}

/// `[20, 5]`: whole values print without a fraction.
fn numbers_line(operands: &[Operand]) -> String {
    let values = operands.iter().map(|op| op.value.to_string()).collect::<Vec<_>>();
    format!("[{}]", values.join(", "))
}
