//! Quarantine sinks for failing artifacts
//!
//! Failing candidates are copied into per-category folders for manual
//! inspection. The copy side effect sits behind a trait so the runner
//! can be tested with an in-memory recorder instead of real filesystem
//! copies.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Failure buckets with a quarantine folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarantineBucket {
    Timeout,
    Execution,
    Parse,
    WrongAnswer,
}

impl QuarantineBucket {
    /// Folder name under the output directory
    pub fn dir_name(&self) -> &'static str {
        match self {
            QuarantineBucket::Timeout => "timeout_errors",
            QuarantineBucket::Execution => "execution_errors",
            QuarantineBucket::Parse => "parse_errors",
            QuarantineBucket::WrongAnswer => "wrong_answer_errors",
        }
    }
}

/// Destination for failing artifacts
pub trait ArtifactSink: Send + Sync {
    /// Copy the artifact into the given bucket
    fn quarantine(&self, artifact: &Path, bucket: QuarantineBucket) -> Result<()>;
}

/// Filesystem sink copying artifacts under an output directory
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at the evaluation output directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for FsSink {
    fn quarantine(&self, artifact: &Path, bucket: QuarantineBucket) -> Result<()> {
        let dir = self.root.join(bucket.dir_name());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let file_name = artifact
            .file_name()
            .with_context(|| format!("Artifact path has no file name: {}", artifact.display()))?;
        std::fs::copy(artifact, dir.join(file_name))
            .with_context(|| format!("Failed to copy {}", artifact.display()))?;

        Ok(())
    }
}

/// In-memory sink recording quarantine calls, for tests
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(PathBuf, QuarantineBucket)>>,
}

impl MemorySink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded quarantine calls
    pub fn recorded(&self) -> Vec<(PathBuf, QuarantineBucket)> {
        self.records.lock().expect("sink lock poisoned").clone()
    }
}

impl ArtifactSink for MemorySink {
    fn quarantine(&self, artifact: &Path, bucket: QuarantineBucket) -> Result<()> {
        self.records
            .lock()
            .expect("sink lock poisoned")
            .push((artifact.to_path_buf(), bucket));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_sink_copies_into_bucket_folder() {
        let dir = TempDir::new().unwrap();
        let artifact = dir.path().join("opt_code_3.py");
        std::fs::write(&artifact, "print(1)").unwrap();

        let out = dir.path().join("results");
        let sink = FsSink::new(&out);
        sink.quarantine(&artifact, QuarantineBucket::WrongAnswer)
            .unwrap();

        let copied = out.join("wrong_answer_errors").join("opt_code_3.py");
        assert!(copied.exists());
        // Original is untouched
        assert!(artifact.exists());
    }

    #[test]
    fn test_fs_sink_missing_artifact_errors() {
        let dir = TempDir::new().unwrap();
        let sink = FsSink::new(dir.path().join("results"));
        let result = sink.quarantine(&dir.path().join("ghost.py"), QuarantineBucket::Parse);
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_sink_records_calls() {
        let sink = MemorySink::new();
        sink.quarantine(Path::new("a.py"), QuarantineBucket::Timeout)
            .unwrap();
        sink.quarantine(Path::new("b.py"), QuarantineBucket::Parse)
            .unwrap();

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].1, QuarantineBucket::Timeout);
    }

    #[test]
    fn test_bucket_dir_names() {
        assert_eq!(QuarantineBucket::Timeout.dir_name(), "timeout_errors");
        assert_eq!(QuarantineBucket::Execution.dir_name(), "execution_errors");
        assert_eq!(QuarantineBucket::Parse.dir_name(), "parse_errors");
        assert_eq!(
            QuarantineBucket::WrongAnswer.dir_name(),
            "wrong_answer_errors"
        );
    }
}
