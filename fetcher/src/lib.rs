use digest_core::persist::{load_json, save_json};
use digest_core::{DigestError, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("postdigest/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
    /// Bound on the whole request, connect through body.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Where the dataset written by [`fetch_dataset`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Remote,
    Mock,
}

/// Fetch the posts once and write them to `dest`. Any network-side failure
/// (transport, timeout, non-2xx, undecodable body) is logged and replaced by
/// the mock dataset at `mock`. An error comes back only if the fallback fails
/// too, or if the fetched data cannot be written.
pub fn fetch_dataset(config: &FetchConfig, dest: &Path, mock: &Path) -> Result<DatasetSource> {
    tracing::info!(url = %config.url, "fetching data from API");
    match fetch_json(config) {
        Ok(value) => {
            save_json(dest, &value)?;
            tracing::info!(dest = %dest.display(), "data fetched and saved");
            Ok(DatasetSource::Remote)
        }
        Err(err) => {
            tracing::warn!(error = %err, "error fetching data from API, falling back to mock data");
            load_fallback(mock, dest)?;
            Ok(DatasetSource::Mock)
        }
    }
}

/// Copy the mock dataset to `dest`, re-serialized. `dest` is left untouched
/// unless the mock file exists and parses.
pub fn load_fallback(mock: &Path, dest: &Path) -> Result<()> {
    let value = load_json(mock).inspect_err(|err| {
        tracing::error!(error = %err, "error using mock data");
    })?;
    save_json(dest, &value).inspect_err(|err| {
        tracing::error!(error = %err, "error using mock data");
    })?;
    tracing::info!(mock = %mock.display(), dest = %dest.display(), "mock data saved");
    Ok(())
}

/// Single GET of `config.url`, decoded as JSON.
pub fn fetch_json(config: &FetchConfig) -> Result<Value> {
    let url = config.url.as_str();
    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .build()
        .map_err(|e| transport_err(url, config.timeout, e))?;

    let resp = client.get(url).send().map_err(|e| transport_err(url, config.timeout, e))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(DigestError::Status { url: url.to_string(), status: status.as_u16() });
    }
    let value = resp.json::<Value>().map_err(|e| transport_err(url, config.timeout, e))?;
    tracing::debug!(url, status = status.as_u16(), "response decoded");
    Ok(value)
}

fn transport_err(url: &str, timeout: Duration, e: reqwest::Error) -> DigestError {
    if e.is_timeout() {
        DigestError::Timeout { url: url.to_string(), timeout_ms: timeout.as_millis() as u64 }
    } else if e.is_decode() {
        DigestError::Transport { url: url.to_string(), reason: format!("invalid JSON body: {e}") }
    } else {
        DigestError::Transport { url: url.to_string(), reason: e.to_string() }
    }
}
