//! The `extract` command: drives the extraction core over a JSON Lines
//! stream of raw product documents.
//!
//! Per-document failures are logged and counted rather than propagated so a
//! single bad document does not abort the full run. Only I/O setup failures
//! (unreadable input, unwritable output) are fatal.

mod runner;

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Raw product documents, one JSON object per line
    #[arg(long, env = "LAPSPEC_INPUT")]
    pub input: PathBuf,

    /// Destination for extracted documents (JSON Lines, truncated on open)
    #[arg(long, env = "LAPSPEC_OUTPUT")]
    pub output: PathBuf,

    /// Maximum documents processed concurrently
    #[arg(long, env = "LAPSPEC_JOBS", default_value_t = 8)]
    pub jobs: usize,

    /// Print the final processing statistics as JSON on stdout
    #[arg(long)]
    pub stats_json: bool,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let stats = runner::run_extraction(&args).await?;
    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}
