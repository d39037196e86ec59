//! Benchmark pipeline for LLM-generated optimization code
//!
//! This crate implements the three stages of the orbench pipeline:
//!
//! - **Prepare**: build generation prompts from labeled LP problem sets
//! - **Generate**: call a local Ollama-compatible server to produce one
//!   candidate program per problem
//! - **Evaluate**: execute each candidate under a timeout, extract the
//!   printed objective value, and score it against ground truth
//!
//! # Example
//!
//! ```rust,ignore
//! use orbench_core::{AnswerSource, AnswerStore, Category, EvalConfig, EvalRunner};
//!
//! let store = AnswerStore::load(&[AnswerSource::new("easy_lp.jsonl", Category::EasyLp)])?;
//! let config = EvalConfig::new("generated_code", "results");
//! let summary = EvalRunner::new(config, store).run().await?;
//! println!("accuracy: {:.2}%", summary.accuracy * 100.0);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod model;
pub mod prompt;

// Re-exports for convenience
pub use config::EvalConfig;
pub use dataset::{AnswerSource, AnswerStore, Category, GroundTruthRecord, ProblemRecord};
pub use error::{BenchError, BenchResult};
pub use eval::{
    CodeExecutor, EvalResult, EvalRunner, EvalStatus, ExecStatus, ExecutionOutcome, Summary,
};
pub use model::OllamaClient;
pub use prompt::{build_queries, Query};
