//! CLI command implementations

pub mod check;
pub mod definition;
pub mod list;
pub mod now;

pub use definition::{Cli, Commands, TimeArgs};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::clock::{TimeResolver, TimeSession};
use crate::config::Config;
use crate::overdue::parse_due_date;

/// Build the session's time source from config and command-line overrides
pub fn time_session(args: &TimeArgs, config: &Config) -> TimeSession {
    let resolver = if args.offline {
        TimeResolver::local_only()
    } else if let Some(url) = &args.authority {
        TimeResolver::new(url.as_str()).with_timeout(config.time.timeout())
    } else {
        TimeResolver::from_config(&config.time)
    };
    TimeSession::new(resolver)
}

/// The calendar day to evaluate against: `--today` if given, else the
/// session's resolved time
pub async fn resolve_today(today: Option<&str>, session: &TimeSession) -> Result<NaiveDate> {
    match today {
        Some(raw) => parse_due_date(raw)
            .with_context(|| format!("Invalid --today value '{}', expected YYYY-MM-DD", raw)),
        None => Ok(session.now().await.today()),
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ResolvedTime, TimeOrigin};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_equal_to_max() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("café au lait", 7), "café...");
    }

    #[test]
    fn test_time_session_offline_wins() {
        let mut config = Config::default();
        config.time.authority_url = Some("http://127.0.0.1:9/now".to_string());
        let args = TimeArgs {
            authority: None,
            offline: true,
        };
        assert_eq!(time_session(&args, &config).resolver().authority(), None);
    }

    #[test]
    fn test_time_session_flag_overrides_config() {
        let mut config = Config::default();
        config.time.authority_url = Some("http://configured/now".to_string());
        let args = TimeArgs {
            authority: Some("http://flag/now".to_string()),
            offline: false,
        };
        assert_eq!(
            time_session(&args, &config).resolver().authority(),
            Some("http://flag/now")
        );

        let session = time_session(&TimeArgs::default(), &config);
        assert_eq!(session.resolver().authority(), Some("http://configured/now"));
    }

    #[tokio::test]
    async fn test_resolve_today_override() -> Result<()> {
        let session = TimeSession::new(TimeResolver::local_only());
        let today = resolve_today(Some("2026-01-29"), &session).await?;
        assert_eq!(today, NaiveDate::from_ymd_opt(2026, 1, 29).unwrap());
        // The override never touches the session.
        assert!(session.get().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_today_rejects_bad_override() {
        let session = TimeSession::new(TimeResolver::local_only());
        let err = resolve_today(Some("yesterday"), &session).await.unwrap_err();
        assert!(err.to_string().contains("Invalid --today"));
    }

    #[tokio::test]
    async fn test_resolve_today_from_session() -> Result<()> {
        let pinned = ResolvedTime::new(
            Utc.with_ymd_and_hms(2026, 1, 29, 22, 0, 0).unwrap(),
            TimeOrigin::LocalFallback,
        );
        let session = TimeSession::fixed(pinned);
        assert_eq!(
            resolve_today(None, &session).await?,
            NaiveDate::from_ymd_opt(2026, 1, 29).unwrap()
        );
        Ok(())
    }
}
