//! Evaluation orchestrator
//!
//! Walks the candidate directory in id order, runs each candidate
//! through execute -> extract -> compare, quarantines failing artifacts,
//! and writes the per-item result log plus the aggregate summary.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::{
    compare, extract_objective, ArtifactSink, CodeExecutor, EvalResult, ExecStatus, FsSink,
    QuarantineBucket, Summary,
};
use crate::config::EvalConfig;
use crate::dataset::{AnswerStore, GroundTruthRecord};

/// Per-item result log file name
pub const RESULTS_FILE: &str = "evaluation_results.jsonl";

/// Summary file name
pub const SUMMARY_FILE: &str = "accuracy.jsonl";

/// Stored stdout is capped at this many characters for parse errors
const PARSE_ERROR_OUTPUT_LIMIT: usize = 500;

/// Callback for progress updates during a run
pub type ProgressCallback = Box<dyn Fn(EvalProgress) + Send + Sync>;

/// Progress update emitted once per artifact
#[derive(Debug, Clone)]
pub struct EvalProgress {
    /// Index of the current artifact (0-based)
    pub current: usize,
    /// Total number of artifacts
    pub total: usize,
    /// Problem id of the current artifact
    pub id: u64,
}

/// Orchestrator for a full evaluation pass
pub struct EvalRunner {
    config: EvalConfig,
    store: AnswerStore,
    sink: Box<dyn ArtifactSink>,
    progress_callback: Option<ProgressCallback>,
}

impl EvalRunner {
    /// Create a runner quarantining into the configured output directory
    pub fn new(config: EvalConfig, store: AnswerStore) -> Self {
        let sink = Box::new(FsSink::new(&config.output_dir));
        Self {
            config,
            store,
            sink,
            progress_callback: None,
        }
    }

    /// Replace the quarantine sink (used by tests)
    pub fn with_sink(mut self, sink: Box<dyn ArtifactSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Set a progress callback
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    /// Evaluate every candidate and persist the result log and summary
    pub async fn run(&self) -> Result<Summary> {
        if self.store.is_empty() {
            bail!("No ground-truth answers loaded, refusing to evaluate");
        }

        tokio::fs::create_dir_all(&self.config.output_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create output directory {}",
                    self.config.output_dir.display()
                )
            })?;

        let artifacts = self.collect_artifacts()?;
        let executor =
            CodeExecutor::new(self.config.timeout_secs).with_interpreter(&self.config.interpreter);

        let total = artifacts.len();
        let mut results = Vec::new();

        for (index, (id, path)) in artifacts.iter().enumerate() {
            self.emit_progress(EvalProgress {
                current: index,
                total,
                id: *id,
            });

            let Some(truth) = self.store.get(*id) else {
                tracing::warn!(id, path = %path.display(), "No ground-truth answer, skipping");
                continue;
            };

            let result = self.evaluate_artifact(*id, path, truth, &executor).await;
            results.push(result);
        }

        self.write_results(&results).await?;
        let summary = Summary::from_results(&results);
        self.write_summary(&summary).await?;

        Ok(summary)
    }

    /// Scan the code directory for candidates, ordered by problem id
    fn collect_artifacts(&self) -> Result<Vec<(u64, PathBuf)>> {
        let entries = std::fs::read_dir(&self.config.code_dir).with_context(|| {
            format!(
                "Failed to read code directory {}",
                self.config.code_dir.display()
            )
        })?;

        let mut artifacts = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "py") {
                continue;
            }
            match artifact_id(&path) {
                Some(id) => artifacts.push((id, path)),
                None => {
                    tracing::warn!(
                        path = %path.display(),
                        "File name has no trailing numeric id, skipping"
                    );
                }
            }
        }

        artifacts.sort_by_key(|(id, _)| *id);
        Ok(artifacts)
    }

    /// Run one candidate through the execute -> extract -> compare chain
    async fn evaluate_artifact(
        &self,
        id: u64,
        path: &Path,
        truth: &GroundTruthRecord,
        executor: &CodeExecutor,
    ) -> EvalResult {
        let outcome = executor.execute(path).await;

        match outcome.status {
            ExecStatus::Timeout => {
                self.quarantine(path, QuarantineBucket::Timeout);
                EvalResult::timeout(id, outcome.error_detail.unwrap_or_default(), truth)
            }
            ExecStatus::RuntimeError => {
                self.quarantine(path, QuarantineBucket::Execution);
                EvalResult::execution_error(id, outcome.error_detail.unwrap_or_default(), truth)
            }
            ExecStatus::Ok => match extract_objective(&outcome.stdout) {
                None => {
                    self.quarantine(path, QuarantineBucket::Parse);
                    let truncated: String = outcome
                        .stdout
                        .chars()
                        .take(PARSE_ERROR_OUTPUT_LIMIT)
                        .collect();
                    EvalResult::parse_error(id, truncated, truth)
                }
                Some(value) => {
                    if compare::matches(value, &truth.answer) {
                        EvalResult::correct(id, value, truth)
                    } else {
                        self.quarantine(path, QuarantineBucket::WrongAnswer);
                        let diff = truth
                            .answer
                            .trim()
                            .parse::<f64>()
                            .ok()
                            .map(|expected| (value - expected).abs());
                        EvalResult::wrong_answer(id, value, diff, truth)
                    }
                }
            },
        }
    }

    /// Best-effort quarantine; failures are logged, never fatal
    fn quarantine(&self, path: &Path, bucket: QuarantineBucket) {
        if let Err(e) = self.sink.quarantine(path, bucket) {
            tracing::error!(
                path = %path.display(),
                bucket = bucket.dir_name(),
                error = %e,
                "Failed to quarantine artifact"
            );
        }
    }

    async fn write_results(&self, results: &[EvalResult]) -> Result<()> {
        let mut out = String::new();
        for result in results {
            out.push_str(&serde_json::to_string(result)?);
            out.push('\n');
        }

        let path = self.config.output_dir.join(RESULTS_FILE);
        tokio::fs::write(&path, out)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    async fn write_summary(&self, summary: &Summary) -> Result<()> {
        let path = self.config.output_dir.join(SUMMARY_FILE);
        let mut line = serde_json::to_string(summary)?;
        line.push('\n');
        tokio::fs::write(&path, line)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn emit_progress(&self, progress: EvalProgress) {
        if let Some(callback) = &self.progress_callback {
            callback(progress);
        }
    }
}

/// Problem id from the trailing numeric token of the file stem
fn artifact_id(path: &Path) -> Option<u64> {
    let stem = path.file_stem()?.to_str()?;
    stem.rsplit('_').next()?.parse().ok()
}
