//! Evaluation configuration
//!
//! Configuration options for scoring a directory of generated programs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Directory containing the generated candidate programs
    pub code_dir: PathBuf,

    /// Directory for result logs and quarantined artifacts
    pub output_dir: PathBuf,

    /// Wall-clock timeout per candidate in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Interpreter used to run candidates
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

fn default_timeout() -> u64 {
    300
}

fn default_interpreter() -> String {
    "python3".to_string()
}

impl EvalConfig {
    /// Create a config with default timeout and interpreter
    pub fn new(code_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            code_dir: code_dir.into(),
            output_dir: output_dir.into(),
            timeout_secs: default_timeout(),
            interpreter: default_interpreter(),
        }
    }

    /// Set the per-candidate timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the interpreter used to run candidates
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EvalConfig::new("code", "out");
        assert_eq!(config.timeout_secs, 300);
        assert_eq!(config.interpreter, "python3");
    }

    #[test]
    fn test_builder() {
        let config = EvalConfig::new("code", "out")
            .with_timeout(60)
            .with_interpreter("python");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.interpreter, "python");
    }

    #[test]
    fn test_serde_defaults() {
        let config: EvalConfig =
            serde_json::from_str(r#"{"code_dir": "code", "output_dir": "out"}"#).unwrap();
        assert_eq!(config.timeout_secs, 300);
        assert_eq!(config.interpreter, "python3");
    }
}
