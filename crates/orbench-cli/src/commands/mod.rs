//! Subcommand implementations

mod evaluate;
mod generate;
mod prepare;

use anyhow::Result;

use crate::args::{Cli, Commands};

/// Dispatch the parsed CLI to its subcommand
pub async fn route(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Prepare {
            easy_lp,
            complex_lp,
            output,
        } => prepare::run(easy_lp, complex_lp, output),
        Commands::Generate {
            input,
            output_dir,
            model_name,
            base_url,
            timeout,
        } => generate::run(input, output_dir, model_name, base_url, timeout).await,
        Commands::Evaluate {
            code_dir,
            output_dir,
            easy_lp,
            complex_lp,
            timeout,
            interpreter,
        } => evaluate::run(code_dir, output_dir, easy_lp, complex_lp, timeout, interpreter).await,
    }
}
