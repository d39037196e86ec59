//! `orbench evaluate`: execute candidates and score them against ground truth

use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use orbench_core::eval::{RESULTS_FILE, SUMMARY_FILE};
use orbench_core::{AnswerSource, AnswerStore, Category, EvalConfig, EvalRunner};

pub async fn run(
    code_dir: PathBuf,
    output_dir: PathBuf,
    easy_lp: Option<PathBuf>,
    complex_lp: Option<PathBuf>,
    timeout: u64,
    interpreter: String,
) -> Result<()> {
    let mut sources = Vec::new();
    if let Some(path) = easy_lp {
        sources.push(AnswerSource::new(path, Category::EasyLp));
    }
    if let Some(path) = complex_lp {
        sources.push(AnswerSource::new(path, Category::ComplexLp));
    }

    let store = AnswerStore::load(&sources).context("Failed to load ground-truth answers")?;
    tracing::info!(count = store.len(), "Loaded ground-truth answers");

    let config = EvalConfig::new(&code_dir, &output_dir)
        .with_timeout(timeout)
        .with_interpreter(interpreter);
    let mut runner = EvalRunner::new(config, store);

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("progress template must parse"),
    );
    bar.set_message("Evaluating code");
    let progress_bar = bar.clone();
    runner.set_progress_callback(Box::new(move |progress| {
        progress_bar.set_length(progress.total as u64);
        // `current` is a 0-based index, so the bar counts started artifacts
        progress_bar.set_position(progress.current as u64 + 1);
    }));

    let summary = runner.run().await?;
    bar.finish_and_clear();

    print!("{}", summary.render_table());
    println!("Results saved to: {}", output_dir.display());
    println!("  - Summary: {}", output_dir.join(SUMMARY_FILE).display());
    println!("  - Details: {}", output_dir.join(RESULTS_FILE).display());
    Ok(())
}
