//! Candidate program execution
//!
//! Runs one generated program as a child process with captured output
//! and a hard wall-clock timeout. The child is spawned with
//! `kill_on_drop`, so abandoning the wait on timeout also terminates
//! the process; nothing outlives the timeout boundary.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tokio::time::timeout;

/// Process-level outcome classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecStatus {
    /// Clean zero exit
    Ok,
    /// Wall-clock timeout expired
    Timeout,
    /// Nonzero exit or launch failure
    RuntimeError,
}

/// Captured result of running one candidate program
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    /// Captured standard output, trimmed
    pub stdout: String,

    /// Process-level status
    pub status: ExecStatus,

    /// Failure description for non-ok statuses
    pub error_detail: Option<String>,
}

impl ExecutionOutcome {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            status: ExecStatus::Ok,
            error_detail: None,
        }
    }

    fn timeout(secs: u64) -> Self {
        Self {
            stdout: String::new(),
            status: ExecStatus::Timeout,
            error_detail: Some(format!("Timeout after {secs} seconds")),
        }
    }

    fn runtime_error(detail: String) -> Self {
        Self {
            stdout: String::new(),
            status: ExecStatus::RuntimeError,
            error_detail: Some(detail),
        }
    }

    /// Whether the program exited cleanly
    pub fn is_ok(&self) -> bool {
        self.status == ExecStatus::Ok
    }
}

/// Executor for candidate programs
#[derive(Debug, Clone)]
pub struct CodeExecutor {
    interpreter: String,
    timeout: Duration,
}

impl CodeExecutor {
    /// Create an executor running candidates through `python3`
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            interpreter: "python3".to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Use a different interpreter binary
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Run one candidate to completion or timeout
    pub async fn execute(&self, artifact: &Path) -> ExecutionOutcome {
        let mut command = Command::new(&self.interpreter);
        command
            .arg(artifact)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                return ExecutionOutcome::runtime_error(format!(
                    "Failed to launch {}: {e}",
                    artifact.display()
                ));
            }
        };

        match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                ExecutionOutcome::ok(stdout)
            }
            Ok(Ok(output)) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                let code = output.status.code().unwrap_or(-1);
                ExecutionOutcome::runtime_error(format!(
                    "Execution error (return code {code}): {stderr}"
                ))
            }
            Ok(Err(e)) => {
                ExecutionOutcome::runtime_error(format!("Failed to collect output: {e}"))
            }
            // Dropping the wait future kills the child via kill_on_drop
            Err(_) => ExecutionOutcome::timeout(self.timeout.as_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn sh_executor(timeout_secs: u64) -> CodeExecutor {
        CodeExecutor::new(timeout_secs).with_interpreter("sh")
    }

    #[tokio::test]
    async fn test_clean_exit_captures_stdout() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "ok.sh", "echo 42.5\n");

        let outcome = sh_executor(10).execute(&script).await;
        assert_eq!(outcome.status, ExecStatus::Ok);
        assert_eq!(outcome.stdout, "42.5");
        assert!(outcome.error_detail.is_none());
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_runtime_error() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "fail.sh", "echo boom >&2\nexit 3\n");

        let outcome = sh_executor(10).execute(&script).await;
        assert_eq!(outcome.status, ExecStatus::RuntimeError);
        let detail = outcome.error_detail.unwrap();
        assert!(detail.contains("return code 3"));
        assert!(detail.contains("boom"));
    }

    #[tokio::test]
    async fn test_timeout_discards_partial_output() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "slow.sh", "echo partial\nsleep 30\n");

        let outcome = sh_executor(1).execute(&script).await;
        assert_eq!(outcome.status, ExecStatus::Timeout);
        assert_eq!(outcome.stdout, "");
        assert_eq!(
            outcome.error_detail.as_deref(),
            Some("Timeout after 1 seconds")
        );
    }

    #[tokio::test]
    async fn test_missing_interpreter_is_runtime_error() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "x.sh", "echo hi\n");

        let executor = CodeExecutor::new(5).with_interpreter("definitely-not-a-binary");
        let outcome = executor.execute(&script).await;
        assert_eq!(outcome.status, ExecStatus::RuntimeError);
        assert!(outcome.error_detail.unwrap().contains("Failed to launch"));
    }
}
