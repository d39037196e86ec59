//! Problem datasets and ground-truth answers

mod jsonl;
mod record;
mod store;

pub use jsonl::{append_jsonl, read_jsonl, write_jsonl};
pub use record::{Category, GroundTruthRecord, ProblemRecord};
pub use store::{AnswerSource, AnswerStore};
