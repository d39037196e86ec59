//! Evaluation engine: execute, extract, compare, aggregate

pub mod compare;
mod executor;
mod extract;
mod result;
mod runner;
mod sink;

pub use executor::{CodeExecutor, ExecStatus, ExecutionOutcome};
pub use extract::extract_objective;
pub use result::{CategoryStats, EvalResult, EvalStatus, Summary};
pub use runner::{EvalProgress, EvalRunner, ProgressCallback, RESULTS_FILE, SUMMARY_FILE};
pub use sink::{ArtifactSink, FsSink, MemorySink, QuarantineBucket};
