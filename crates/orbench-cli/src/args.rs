//! CLI argument definitions using clap
//!
//! One subcommand per pipeline stage:
//! - orbench prepare    # build generation prompts from labeled datasets
//! - orbench generate   # produce candidate code through an Ollama server
//! - orbench evaluate   # execute and score the candidates

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orbench")]
#[command(about = "Benchmark harness for LLM-generated optimization code")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build generation prompts from labeled problem datasets
    Prepare {
        /// Path to the Easy LP JSONL dataset
        #[arg(long, required_unless_present = "complex_lp")]
        easy_lp: Option<PathBuf>,

        /// Path to the Complex LP JSONL dataset
        #[arg(long, required_unless_present = "easy_lp")]
        complex_lp: Option<PathBuf>,

        /// Path for the output queries JSONL file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate candidate programs through an Ollama-compatible server
    Generate {
        /// Path to the queries JSONL file produced by `prepare`
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to save generated programs into
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Model name on the generation server
        #[arg(long, default_value = "orlm-qwen3-8b")]
        model_name: String,

        /// Base URL of the generation server
        #[arg(long, default_value = "http://localhost:11434")]
        base_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 600)]
        timeout: u64,
    },

    /// Execute candidate programs and score them against ground truth
    Evaluate {
        /// Directory containing the generated programs
        #[arg(short, long)]
        code_dir: PathBuf,

        /// Output directory for result logs and quarantined artifacts
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Path to the Easy LP JSONL dataset with ground truth
        #[arg(long, required_unless_present = "complex_lp")]
        easy_lp: Option<PathBuf>,

        /// Path to the Complex LP JSONL dataset with ground truth
        #[arg(long, required_unless_present = "easy_lp")]
        complex_lp: Option<PathBuf>,

        /// Wall-clock timeout per candidate in seconds
        #[arg(long, default_value_t = 300)]
        timeout: u64,

        /// Interpreter used to run candidates
        #[arg(long, default_value = "python3")]
        interpreter: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_args_parse() {
        let cli = Cli::try_parse_from([
            "orbench", "evaluate", "-c", "code", "-o", "out", "--easy-lp", "easy.jsonl",
        ])
        .unwrap();

        match cli.command {
            Commands::Evaluate {
                code_dir,
                timeout,
                easy_lp,
                complex_lp,
                ..
            } => {
                assert_eq!(code_dir, PathBuf::from("code"));
                assert_eq!(timeout, 300);
                assert!(easy_lp.is_some());
                assert!(complex_lp.is_none());
            }
            _ => panic!("expected evaluate subcommand"),
        }
    }

    #[test]
    fn test_evaluate_requires_a_dataset() {
        let result = Cli::try_parse_from(["orbench", "evaluate", "-c", "code", "-o", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_prepare_requires_a_dataset() {
        let result = Cli::try_parse_from(["orbench", "prepare", "-o", "queries.jsonl"]);
        assert!(result.is_err());
    }
}
