//! orbench CLI application
//!
//! Three-stage benchmark pipeline for LLM-generated optimization code:
//!
//! ```bash
//! orbench prepare --easy-lp easy.jsonl --complex-lp complex.jsonl -o queries.jsonl
//! orbench generate -i queries.jsonl -o generated_code
//! orbench evaluate -c generated_code -o results --easy-lp easy.jsonl --complex-lp complex.jsonl
//! ```

mod args;
mod commands;

use anyhow::Result;
use clap::Parser;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::route(cli).await
}
