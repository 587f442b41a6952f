use anyhow::Result;
use clap::Parser;
use fetcher::{fetch_dataset, FetchConfig, DEFAULT_API_URL, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "fetcher")]
#[command(about = "Fetch posts from the API to a JSON file, falling back to mock data")]
struct Cli {
    /// API endpoint returning a JSON array of posts
    #[arg(long, default_value = DEFAULT_API_URL)]
    url: String,
    /// Output JSON file path
    #[arg(long, default_value = "data.json")]
    output: PathBuf,
    /// Mock dataset used when the API cannot be reached
    #[arg(long, default_value = "mock.json")]
    mock: PathBuf,
    /// Request timeout seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Cli::parse();
    let config = FetchConfig {
        url: args.url,
        timeout: Duration::from_secs(args.timeout_secs),
        user_agent: args.user_agent,
    };

    match fetch_dataset(&config, &args.output, &args.mock) {
        Ok(source) => tracing::info!(?source, output = %args.output.display(), "dataset ready"),
        Err(err) => tracing::error!(error = %err, "no dataset written"),
    }
    Ok(())
}
