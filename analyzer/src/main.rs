use analyzer::{analyze_or_zero, write_report};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(about = "Summarize a JSON dataset of posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute post statistics and write the summary report
    Summarize {
        /// Dataset JSON file
        #[arg(long, default_value = "data.json")]
        input: PathBuf,
        /// Summary text file
        #[arg(long, default_value = "summary.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { input, output } => {
            let summary = analyze_or_zero(&input);
            print!("{summary}");
            if let Err(err) = write_report(&summary, &output) {
                tracing::debug!(error = %err, "summary not written");
            }
            Ok(())
        }
    }
}
