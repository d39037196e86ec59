//! Error types for the orbench pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the pipeline crates
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors produced by the benchmark pipeline
#[derive(Debug, Error)]
pub enum BenchError {
    /// A dataset file could not be read or parsed
    #[error("dataset error in {path}: {message}")]
    Dataset { path: PathBuf, message: String },

    /// The generation server rejected or failed a request
    #[error("model request failed: {0}")]
    Model(String),

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure outside of a dataset context
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    /// Create a dataset error for the given file
    pub fn dataset(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Dataset {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a model error
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into())
    }
}
