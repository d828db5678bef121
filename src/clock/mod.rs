//! Session time resolution
//!
//! Asks a remote time authority for the current instant and falls back to the
//! local clock when the authority is unreachable, slow, or answers with
//! something unusable. Resolution never fails.

pub mod error;
pub mod session;

pub use error::TimeFetchError;
pub use session::TimeSession;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::TimeConfig;
use crate::overdue::day_of;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Where a resolved instant came from. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOrigin {
    Remote,
    LocalFallback,
}

impl TimeOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::LocalFallback => "local-fallback",
        }
    }
}

impl fmt::Display for TimeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The session's notion of "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTime {
    value: DateTime<Utc>,
    origin: TimeOrigin,
}

impl ResolvedTime {
    pub fn new(value: DateTime<Utc>, origin: TimeOrigin) -> Self {
        Self { value, origin }
    }

    pub fn remote(value: DateTime<Utc>) -> Self {
        Self::new(value, TimeOrigin::Remote)
    }

    /// Read the local clock.
    pub fn local_now() -> Self {
        Self::new(Utc::now(), TimeOrigin::LocalFallback)
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.value
    }

    pub fn origin(&self) -> TimeOrigin {
        self.origin
    }

    /// Calendar day used for overdue comparisons
    pub fn today(&self) -> NaiveDate {
        day_of(self.value)
    }
}

#[derive(Debug, Deserialize)]
struct TimePayload {
    #[serde(alias = "timestamp", alias = "time")]
    now: i64,
}

/// Parse an authority response body holding epoch milliseconds.
pub fn parse_payload(body: &str) -> error::Result<DateTime<Utc>> {
    let payload: TimePayload = serde_json::from_str(body)?;
    DateTime::from_timestamp_millis(payload.now).ok_or(TimeFetchError::OutOfRange(payload.now))
}

/// Resolves the current instant, preferring a remote authority.
#[derive(Debug, Clone)]
pub struct TimeResolver {
    authority: Option<String>,
    timeout: Duration,
}

impl Default for TimeResolver {
    fn default() -> Self {
        Self::local_only()
    }
}

impl TimeResolver {
    /// Resolver that queries `authority_url` before falling back
    pub fn new(authority_url: impl Into<String>) -> Self {
        Self {
            authority: Some(authority_url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolver that always reads the local clock
    pub fn local_only() -> Self {
        Self {
            authority: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(config: &TimeConfig) -> Self {
        let resolver = match config.authority_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::local_only(),
        };
        resolver.with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve "now". Never fails: any problem with the authority is logged
    /// and the local clock is returned instead.
    ///
    /// The returned future may be dropped at any point without side effects.
    pub async fn resolve_now(&self) -> ResolvedTime {
        let Some(url) = self.authority.as_deref() else {
            debug!("No time authority configured, using local clock");
            return ResolvedTime::local_now();
        };

        match self.fetch_remote(url).await {
            Ok(value) => {
                debug!(authority = %url, %value, "Resolved time from authority");
                ResolvedTime::remote(value)
            }
            Err(e) => {
                warn!(
                    authority = %url,
                    error = %e,
                    "Time authority unavailable, falling back to local clock"
                );
                ResolvedTime::local_now()
            }
        }
    }

    /// Issue the single GET against `url` and decode its timestamp.
    pub async fn fetch_remote(&self, url: &str) -> error::Result<DateTime<Utc>> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("task-overdue/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(TimeFetchError::Client)?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimeFetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        parse_payload(&body)
    }

    fn request_error(&self, err: reqwest::Error) -> TimeFetchError {
        if err.is_timeout() {
            TimeFetchError::Timeout(self.timeout)
        } else {
            TimeFetchError::Request(err)
        }
    }
}
