//! Ground-truth answer store
//!
//! Loads expected objective values from one or more labeled JSONL
//! datasets and keys them by problem id.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::dataset::{read_jsonl, Category, GroundTruthRecord, ProblemRecord};
use crate::error::BenchResult;

/// One labeled dataset file plus the category applied to records that
/// carry no `Type` label of their own
#[derive(Debug, Clone)]
pub struct AnswerSource {
    /// Path to the JSONL dataset
    pub path: PathBuf,

    /// Category assumed for unlabeled records in this file
    pub default_category: Category,
}

impl AnswerSource {
    /// Create a source for the given dataset file
    pub fn new(path: impl AsRef<Path>, default_category: Category) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            default_category,
        }
    }
}

/// Immutable map from problem id to ground truth
#[derive(Debug, Default)]
pub struct AnswerStore {
    answers: HashMap<u64, GroundTruthRecord>,
}

impl AnswerStore {
    /// Load ground truth from the given sources
    ///
    /// Ids colliding across sources resolve last-write-wins; each
    /// collision is logged at warn level.
    pub fn load(sources: &[AnswerSource]) -> BenchResult<Self> {
        let mut answers = HashMap::new();

        for source in sources {
            let records: Vec<ProblemRecord> = read_jsonl(&source.path)?;
            tracing::info!(
                path = %source.path.display(),
                count = records.len(),
                "Loaded ground-truth records"
            );

            for record in records {
                let truth = GroundTruthRecord {
                    id: record.id,
                    answer: record.answer.clone(),
                    category: record.category_or(source.default_category),
                };

                if let Some(previous) = answers.insert(record.id, truth) {
                    tracing::warn!(
                        id = record.id,
                        previous = %previous.answer,
                        "Duplicate ground-truth id, keeping the later record"
                    );
                }
            }
        }

        Ok(Self { answers })
    }

    /// Look up the ground truth for a problem id
    pub fn get(&self, id: u64) -> Option<&GroundTruthRecord> {
        self.answers.get(&id)
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether any records were loaded
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn test_load_single_source() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(
            &dir,
            "easy.jsonl",
            &[
                r#"{"id": 1, "Answer": "12.34", "Type": "easy_lp"}"#,
                r#"{"id": 2, "Answer": "100"}"#,
            ],
        );

        let store = AnswerStore::load(&[AnswerSource::new(&path, Category::EasyLp)]).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().answer, "12.34");
        // Unlabeled record picks up the source default
        assert_eq!(store.get(2).unwrap().category, Category::EasyLp);
    }

    #[test]
    fn test_collision_last_wins() {
        let dir = TempDir::new().unwrap();
        let first = write_dataset(&dir, "a.jsonl", &[r#"{"id": 5, "Answer": "1.0"}"#]);
        let second = write_dataset(&dir, "b.jsonl", &[r#"{"id": 5, "Answer": "2.0"}"#]);

        let store = AnswerStore::load(&[
            AnswerSource::new(&first, Category::EasyLp),
            AnswerSource::new(&second, Category::ComplexLp),
        ])
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(5).unwrap().answer, "2.0");
        assert_eq!(store.get(5).unwrap().category, Category::ComplexLp);
    }

    #[test]
    fn test_unrecognized_type_is_unknown() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(
            &dir,
            "odd.jsonl",
            &[r#"{"id": 9, "Answer": "7", "Type": "milp"}"#],
        );

        let store = AnswerStore::load(&[AnswerSource::new(&path, Category::EasyLp)]).unwrap();
        assert_eq!(store.get(9).unwrap().category, Category::Unknown);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.jsonl");
        let result = AnswerStore::load(&[AnswerSource::new(&path, Category::EasyLp)]);
        assert!(result.is_err());
    }
}
