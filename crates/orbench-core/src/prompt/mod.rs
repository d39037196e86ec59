//! Prompt construction for code generation
//!
//! Formats each problem statement into the fixed generation prompt. The
//! prompt asks for gurobipy code printing only the final objective value
//! and instructs the model to end its response with the `<EOR>` marker,
//! which the generation stage uses as a stop sequence.

use serde::{Deserialize, Serialize};

use crate::dataset::{Category, ProblemRecord};

/// Marker the model is told to emit at the end of its response; also the
/// stop sequence passed to the generation server.
pub const END_OF_RESPONSE: &str = "<EOR>";

/// Generation prompt, formatted with the problem's question text
pub const PROMPT_TEMPLATE: &str = "Below is an operations research question. Build a mathematical model and corresponding python code using `gurobipy` that appropriately addresses the question.

IMPORTANT: Your code must print ONLY the final objective value as a number on the last line.

# Question:
{question}

# Response:
(Write the final answer only. Do not include chain-of-thought. End your response with the exact token <EOR> on its own line.)
";

/// One prepared generation query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Problem id
    pub id: u64,

    /// Fully formatted prompt
    pub query: String,

    /// Ground-truth answer carried along for later evaluation
    pub answer: String,

    /// Difficulty category
    #[serde(rename = "type")]
    pub category: Category,

    /// Broad problem domain; the datasets call this field `Category`
    #[serde(rename = "category")]
    pub domain: String,
}

/// Build the prompt for a single question
pub fn build_prompt(question: &str) -> String {
    PROMPT_TEMPLATE.replace("{question}", question)
}

/// Build queries from a batch of problem records
///
/// Records without a question are skipped with a warning; records
/// without a `Type` label take the given fallback category.
pub fn build_queries(records: &[ProblemRecord], default_category: Category) -> Vec<Query> {
    let mut queries = Vec::with_capacity(records.len());

    for record in records {
        let Some(question) = record.question.as_deref() else {
            tracing::warn!(id = record.id, "Record has no question text, skipping");
            continue;
        };

        queries.push(Query {
            id: record.id,
            query: build_prompt(question),
            answer: record.answer.clone(),
            category: record.category_or(default_category),
            domain: record
                .domain
                .clone()
                .unwrap_or_else(|| "optimization".to_string()),
        });
    }

    queries
}
