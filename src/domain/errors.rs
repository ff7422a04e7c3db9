use std::time::Duration;

use thiserror::Error;

/// Failures talking to the localities directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The configured base URL cannot take path segments
    #[error("invalid directory URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON shape
    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// No response arrived in time
    #[error("{url} did not answer within {}s", .after.as_secs())]
    Timeout { url: String, after: Duration },
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
