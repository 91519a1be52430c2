//! Challenge-solving engine.
//!
//! The engine is split into one submodule per stage, with `pipeline.rs` tying
//! them together:
//!
//! ```text
//! challenge
//!    │  normalize            (normalize.rs)   generic de-noising + number-word repair
//!    v
//! normalized text ──────────────┐
//!    │  extract_operands         │ classify  (classify.rs)
//!    │  (extract.rs)             v
//!    v                      Classification
//! Vec<Operand>                   │
//!    └──────────┬────────────────┘
//!               v
//!          evaluate + format_answer   (evaluate.rs)
//!               │
//!               v
//!          RunResult  (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: the five ordered normalization passes.
//! - `extract.rs`: number words to operands, merging adjacent pairs.
//! - `classify.rs`: keyword families to an [`Operation`](crate::Operation).
//! - `evaluate.rs`: arity rules, the division guard and two-decimal formatting.
//! - `metrics.rs`: opt-in per-stage timings and the run result.
//! - `pipeline.rs`: runs the stages in order and emits tracing events.
//!
//! The lookup tables the stages read live under `src/rules/**`.
//!
//! ## Debugging
//!
//! Set `MATHGATE_LOG=mathgate=debug` (binary) or install any `tracing`
//! subscriber (library) to see each stage's output.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/evaluate.rs"]
mod evaluate;
#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/pipeline.rs"]
mod pipeline;

pub use classify::Classification;
pub use evaluate::{FALLBACK_ANSWER, format_answer};
pub use metrics::RunResult;
pub use pipeline::Pipeline;
