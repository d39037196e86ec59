//! Problem record types
//!
//! Defines the problem categories and the record shapes read from the
//! labeled JSONL datasets.

use serde::{Deserialize, Serialize};

/// Difficulty category of a benchmark problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Easy linear programming problems
    EasyLp,
    /// Complex linear programming problems
    ComplexLp,
    /// Category missing or unrecognized in the dataset
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Parse a dataset `Type` string, falling back to `Unknown`
    pub fn parse(s: &str) -> Self {
        match s {
            "easy_lp" => Category::EasyLp,
            "complex_lp" => Category::ComplexLp,
            _ => Category::Unknown,
        }
    }

    /// Serialized name, also used as the summary key prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EasyLp => "easy_lp",
            Category::ComplexLp => "complex_lp",
            Category::Unknown => "unknown",
        }
    }

    /// Whether this category participates in the per-category breakdown
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown)
    }

    /// All categories with a per-category breakdown
    pub fn known() -> &'static [Category] {
        &[Category::EasyLp, Category::ComplexLp]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One problem as stored in the labeled JSONL datasets
///
/// The datasets use capitalized field names; `Question` is only needed by
/// the prepare stage and `Answer` by both prepare and evaluate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// Problem id, unique within a dataset file
    pub id: u64,

    /// Natural-language problem statement
    #[serde(rename = "Question", default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// Ground-truth objective value as decimal text
    ///
    /// Kept verbatim: the comparator infers the required precision from
    /// the number of decimal digits the dataset author wrote.
    #[serde(rename = "Answer")]
    pub answer: String,

    /// Difficulty label, e.g. `easy_lp`
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,

    /// Broad problem domain, e.g. `optimization`
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl ProblemRecord {
    /// Resolve the category, preferring the record's own `Type` label
    pub fn category_or(&self, fallback: Category) -> Category {
        match self.problem_type.as_deref() {
            Some(t) => Category::parse(t),
            None => fallback,
        }
    }
}

/// Ground truth for a single problem, keyed by id in the [`super::AnswerStore`]
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTruthRecord {
    /// Problem id
    pub id: u64,

    /// Expected objective value as decimal text
    pub answer: String,

    /// Difficulty category
    pub category: Category,
}
