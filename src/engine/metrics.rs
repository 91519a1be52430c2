//! Pipeline run metrics.
//!
//! Timing is opt-in: `Pipeline::run` skips it, `Pipeline::run_with_metrics`
//! records one `Duration` per stage. The numbers are only meant for the
//! `--explain` report and for spotting pathological inputs.

use super::classify::Classification;
use super::evaluate::Evaluation;
use crate::{Degradation, Operand};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct SolveMetrics {
    /// Total elapsed time for [`Pipeline::run_with_metrics`](super::Pipeline::run_with_metrics).
    pub total: Duration,
    pub normalize: Duration,
    pub extract: Duration,
    pub classify: Duration,
    /// Evaluation plus formatting.
    pub evaluate: Duration,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub normalized: String,
    pub operands: Vec<Operand>,
    pub classification: Classification,
    /// `Err` only for a zero divisor.
    pub evaluation: Result<Evaluation, Degradation>,
    /// Final answer text; the fallback literal when evaluation failed.
    pub answer: String,
    pub metrics: SolveMetrics,
}
