//! `orbench generate`: produce one candidate program per query

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use orbench_core::dataset::{append_jsonl, read_jsonl};
use orbench_core::{OllamaClient, Query};

/// Failed generations are appended here, one record per failure
const ERROR_LOG: &str = "inference_errors.jsonl";

#[derive(Serialize)]
struct InferenceError {
    id: u64,
    error: String,
    query: String,
}

pub async fn run(
    input: PathBuf,
    output_dir: PathBuf,
    model_name: String,
    base_url: String,
    timeout: u64,
) -> Result<()> {
    let client = OllamaClient::with_base_url(&model_name, &base_url).with_timeout(timeout);

    if !client.check_server().await {
        bail!("Generation server at {base_url} is not reachable; start it with `ollama serve`");
    }
    tracing::info!(model = %model_name, "Generation server is running");

    let queries: Vec<Query> = read_jsonl(&input)
        .with_context(|| format!("Failed to load queries from {}", input.display()))?;
    tracing::info!(count = queries.len(), "Loaded queries");

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let bar = ProgressBar::new(queries.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("progress template must parse"),
    );
    bar.set_message("Generating code");

    let mut success_count = 0usize;
    let mut error_count = 0usize;

    for query in &queries {
        let output_path = output_dir.join(format!("opt_code_{}.py", query.id));

        match client.generate(&query.query).await {
            Ok(code) => {
                std::fs::write(&output_path, code)
                    .with_context(|| format!("Failed to write {}", output_path.display()))?;
                success_count += 1;
            }
            Err(e) => {
                error_count += 1;
                tracing::error!(id = query.id, error = %e, "Generation failed");

                let record = InferenceError {
                    id: query.id,
                    error: e.to_string(),
                    query: query.query.chars().take(200).collect(),
                };
                if let Err(log_err) = append_jsonl(&record, output_dir.join(ERROR_LOG)) {
                    tracing::error!(error = %log_err, "Failed to append inference error log");
                }

                // Placeholder keeps the artifact set aligned with the query set
                let placeholder =
                    format!("# Error generating code: {e}\n# This is a placeholder file\n");
                std::fs::write(&output_path, placeholder)
                    .with_context(|| format!("Failed to write {}", output_path.display()))?;
            }
        }

        bar.inc(1);
    }

    bar.finish();

    println!("Generation complete");
    println!("  Success: {}/{}", success_count, queries.len());
    println!("  Errors:  {}/{}", error_count, queries.len());
    println!("  Output directory: {}", output_dir.display());
    Ok(())
}
