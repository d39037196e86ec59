//! Per-item results and the aggregate summary
//!
//! One [`EvalResult`] is appended per classified artifact, in processing
//! order; the [`Summary`] is always recomputed from the full sequence so
//! it cannot drift from the result log.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::dataset::{Category, GroundTruthRecord};

/// Five-way outcome taxonomy for a classified artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalStatus {
    /// Extracted value matched ground truth within tolerance
    Correct,
    /// Extracted value outside tolerance
    WrongAnswer,
    /// Program ran but no objective value could be extracted
    ParseError,
    /// Nonzero exit or launch failure
    ExecutionError,
    /// Wall-clock timeout expired
    Timeout,
}

/// One line of the per-item result log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResult {
    /// Problem id
    pub id: u64,

    /// Outcome classification
    pub status: EvalStatus,

    /// Extracted value (number) or, for parse errors, truncated stdout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,

    /// Process failure detail, for execution errors and timeouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Ground-truth answer text
    pub expected: String,

    /// |candidate - expected|, for wrong answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<f64>,

    /// Problem category
    #[serde(rename = "type")]
    pub category: Category,
}

impl EvalResult {
    fn base(id: u64, status: EvalStatus, truth: &GroundTruthRecord) -> Self {
        Self {
            id,
            status,
            output: None,
            error: None,
            expected: truth.answer.clone(),
            diff: None,
            category: truth.category,
        }
    }

    /// Result for a matching objective value
    pub fn correct(id: u64, value: f64, truth: &GroundTruthRecord) -> Self {
        let mut result = Self::base(id, EvalStatus::Correct, truth);
        result.output = serde_json::Number::from_f64(value).map(serde_json::Value::Number);
        result
    }

    /// Result for a value outside tolerance
    pub fn wrong_answer(id: u64, value: f64, diff: Option<f64>, truth: &GroundTruthRecord) -> Self {
        let mut result = Self::base(id, EvalStatus::WrongAnswer, truth);
        result.output = serde_json::Number::from_f64(value).map(serde_json::Value::Number);
        result.diff = diff;
        result
    }

    /// Result for output with no extractable objective
    pub fn parse_error(id: u64, truncated_output: String, truth: &GroundTruthRecord) -> Self {
        let mut result = Self::base(id, EvalStatus::ParseError, truth);
        result.output = Some(serde_json::Value::String(truncated_output));
        result
    }

    /// Result for a nonzero exit or launch failure
    pub fn execution_error(id: u64, error: String, truth: &GroundTruthRecord) -> Self {
        let mut result = Self::base(id, EvalStatus::ExecutionError, truth);
        result.error = Some(error);
        result
    }

    /// Result for a timed-out program
    pub fn timeout(id: u64, error: String, truth: &GroundTruthRecord) -> Self {
        let mut result = Self::base(id, EvalStatus::Timeout, truth);
        result.error = Some(error);
        result
    }
}

/// Correct/total tally for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub total: u64,
    pub correct: u64,
}

impl CategoryStats {
    /// Fraction correct, 0 when empty
    pub fn accuracy(&self) -> f64 {
        if self.total > 0 {
            self.correct as f64 / self.total as f64
        } else {
            0.0
        }
    }
}

/// Aggregate counts and rates over a full evaluation run
///
/// Serializes to a flat JSON object: the fixed counters and rates, plus
/// `{category}_accuracy`, `{category}_total`, and `{category}_correct`
/// for each known category that had at least one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: u64,
    pub correct: u64,
    pub execution_failed: u64,
    pub parse_failed: u64,
    pub wrong_answer: u64,
    pub timeout: u64,
    pub accuracy: f64,
    pub executable_rate: f64,
    pub by_category: BTreeMap<Category, CategoryStats>,
}

impl Summary {
    /// Compute the summary from the full result sequence
    pub fn from_results(results: &[EvalResult]) -> Self {
        let mut correct = 0u64;
        let mut execution_failed = 0u64;
        let mut parse_failed = 0u64;
        let mut wrong_answer = 0u64;
        let mut timeout = 0u64;
        let mut by_category: BTreeMap<Category, CategoryStats> = BTreeMap::new();

        for result in results {
            match result.status {
                EvalStatus::Correct => correct += 1,
                EvalStatus::WrongAnswer => wrong_answer += 1,
                EvalStatus::ParseError => parse_failed += 1,
                EvalStatus::ExecutionError => execution_failed += 1,
                EvalStatus::Timeout => timeout += 1,
            }

            if result.category.is_known() {
                let stats = by_category.entry(result.category).or_default();
                stats.total += 1;
                if result.status == EvalStatus::Correct {
                    stats.correct += 1;
                }
            }
        }

        let total = results.len() as u64;
        let executed = total - execution_failed - timeout;
        let (accuracy, executable_rate) = if total > 0 {
            (correct as f64 / total as f64, executed as f64 / total as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            total,
            correct,
            execution_failed,
            parse_failed,
            wrong_answer,
            timeout,
            accuracy,
            executable_rate,
            by_category,
        }
    }

    /// Per-category tally, if that category had any items
    pub fn category(&self, category: Category) -> Option<CategoryStats> {
        self.by_category.get(&category).copied()
    }

    /// Human-readable results table for terminal output
    pub fn render_table(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{:=<60}\n", ""));
        out.push_str("EVALUATION RESULTS\n");
        out.push_str(&format!("{:=<60}\n", ""));
        out.push_str(&format!("Total problems:      {}\n", self.total));
        out.push_str(&format!(
            "Correct:             {} ({:.2}%)\n",
            self.correct,
            self.accuracy * 100.0
        ));
        out.push_str(&format!("Execution failed:    {}\n", self.execution_failed));
        out.push_str(&format!("Parse failed:        {}\n", self.parse_failed));
        out.push_str(&format!("Wrong answer:        {}\n", self.wrong_answer));
        out.push_str(&format!("Timeout:             {}\n", self.timeout));
        out.push_str(&format!(
            "Executable rate:     {:.2}%\n",
            self.executable_rate * 100.0
        ));

        for category in Category::known() {
            if let Some(stats) = self.category(*category) {
                out.push_str(&format!(
                    "{:<20} {}/{} ({:.2}%)\n",
                    format!("{}:", category),
                    stats.correct,
                    stats.total,
                    stats.accuracy() * 100.0
                ));
            }
        }

        out.push_str(&format!("{:=<60}\n", ""));
        out
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("total", &self.total)?;
        map.serialize_entry("correct", &self.correct)?;
        map.serialize_entry("execution_failed", &self.execution_failed)?;
        map.serialize_entry("parse_failed", &self.parse_failed)?;
        map.serialize_entry("wrong_answer", &self.wrong_answer)?;
        map.serialize_entry("timeout", &self.timeout)?;
        map.serialize_entry("accuracy", &self.accuracy)?;
        map.serialize_entry("executable_rate", &self.executable_rate)?;

        for (category, stats) in &self.by_category {
            if stats.total == 0 {
                continue;
            }
            map.serialize_entry(&format!("{}_accuracy", category.as_str()), &stats.accuracy())?;
            map.serialize_entry(&format!("{}_total", category.as_str()), &stats.total)?;
            map.serialize_entry(&format!("{}_correct", category.as_str()), &stats.correct)?;
        }

        map.end()
    }
}
