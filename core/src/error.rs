use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline stages.
pub type Result<T> = std::result::Result<T, DigestError>;

/// Every failure a pipeline stage can report to its caller.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Connection-level failure talking to the API
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    /// API answered with a non-success status
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset {} is empty", path.display())]
    EmptyDataset { path: PathBuf },

    /// Parsed JSON is not an array of objects
    #[error("dataset {} has unexpected shape: {reason}", path.display())]
    InvalidShape { path: PathBuf, reason: String },

    /// No record in the dataset carries the named key
    #[error("missing required column '{field}' in the data")]
    MissingField { field: &'static str },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DigestError {
    /// True for failures on the network side of the fetch.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            DigestError::Transport { .. } | DigestError::Timeout { .. } | DigestError::Status { .. }
        )
    }
}
