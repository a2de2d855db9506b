use clap::{Parser, Subcommand};

mod extract;

#[derive(Debug, Parser)]
#[command(name = "lapspec")]
#[command(about = "Laptop specification extraction pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract canonical specifications from raw product documents
    Extract(extract::ExtractArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => extract::run(args).await,
    }
}
