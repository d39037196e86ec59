//! `orbench prepare`: turn labeled datasets into generation queries

use std::path::PathBuf;

use anyhow::{Context, Result};

use orbench_core::dataset::{read_jsonl, write_jsonl};
use orbench_core::{build_queries, Category, ProblemRecord, Query};

pub fn run(
    easy_lp: Option<PathBuf>,
    complex_lp: Option<PathBuf>,
    output: PathBuf,
) -> Result<()> {
    let mut queries: Vec<Query> = Vec::new();

    let sources = [
        (easy_lp, Category::EasyLp),
        (complex_lp, Category::ComplexLp),
    ];
    for (path, category) in sources {
        let Some(path) = path else { continue };

        let records: Vec<ProblemRecord> = read_jsonl(&path)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?;
        tracing::info!(path = %path.display(), count = records.len(), "Loaded problems");

        queries.extend(build_queries(&records, category));
    }

    write_jsonl(&queries, &output)
        .with_context(|| format!("Failed to write queries to {}", output.display()))?;

    println!("Generated {} queries", queries.len());
    println!("Output written to {}", output.display());
    Ok(())
}
