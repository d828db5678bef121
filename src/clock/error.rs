use std::time::Duration;
use thiserror::Error;

/// Reasons the time authority could not supply a usable instant.
///
/// These never reach callers of [`super::TimeResolver::resolve_now`]; they
/// are logged and the local clock is used instead.
#[derive(Debug, Error)]
pub enum TimeFetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Time authority did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Time authority request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Time authority returned HTTP {0}")]
    Status(u16),

    #[error("Malformed time payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Timestamp out of range: {0} ms")]
    OutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, TimeFetchError>;
