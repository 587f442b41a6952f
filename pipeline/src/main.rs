use anyhow::Result;
use clap::Parser;
use fetcher::{FetchConfig, DEFAULT_API_URL, DEFAULT_USER_AGENT};
use postdigest::{run, Config, DEFAULT_DATASET_PATH, DEFAULT_MOCK_PATH, DEFAULT_SUMMARY_PATH};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "postdigest")]
#[command(about = "Fetch posts, summarize them, and write a text report")]
struct Args {
    /// API endpoint returning a JSON array of posts
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Where the fetched dataset is stored
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    data: PathBuf,
    /// Mock dataset used when the API cannot be reached
    #[arg(long, default_value = DEFAULT_MOCK_PATH)]
    mock: PathBuf,
    /// Summary report path
    #[arg(long, default_value = DEFAULT_SUMMARY_PATH)]
    summary: PathBuf,
    /// Request timeout seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            fetch: FetchConfig {
                url: args.api_url,
                timeout: Duration::from_secs(args.timeout_secs),
                user_agent: args.user_agent,
            },
            dataset_path: args.data,
            mock_path: args.mock,
            summary_path: args.summary,
        }
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let config = Config::from(Args::parse());
    let summary = run(&config);
    tracing::info!(
        total_posts = summary.total_posts,
        unique_users = summary.unique_users,
        average_words = summary.average_words_per_post,
        "run complete"
    );
    Ok(())
}
