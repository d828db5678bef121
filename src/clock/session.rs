//! Once-per-session cache of the resolved time

use tokio::sync::OnceCell;

use super::{ResolvedTime, TimeResolver};

/// Holds the resolver and the first instant it produced.
///
/// The first call to [`TimeSession::now`] resolves; every later call returns
/// that same value. There is no refresh: a new session is a new `TimeSession`.
/// If the first resolution is abandoned mid-flight the session simply stays
/// unresolved and the next call tries again.
#[derive(Debug, Default)]
pub struct TimeSession {
    resolver: TimeResolver,
    resolved: OnceCell<ResolvedTime>,
}

impl TimeSession {
    pub fn new(resolver: TimeResolver) -> Self {
        Self {
            resolver,
            resolved: OnceCell::new(),
        }
    }

    /// Session pinned to a known instant, skipping resolution entirely
    pub fn fixed(resolved: ResolvedTime) -> Self {
        Self {
            resolver: TimeResolver::local_only(),
            resolved: OnceCell::new_with(Some(resolved)),
        }
    }

    pub async fn now(&self) -> ResolvedTime {
        *self
            .resolved
            .get_or_init(|| self.resolver.resolve_now())
            .await
    }

    /// The cached value, if this session has resolved already
    pub fn get(&self) -> Option<ResolvedTime> {
        self.resolved.get().copied()
    }

    pub fn resolver(&self) -> &TimeResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeOrigin;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    #[tokio::test]
    async fn test_session_resolves_once() {
        let session = TimeSession::new(TimeResolver::local_only());
        assert!(session.get().is_none());

        let first = session.now().await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = session.now().await;

        assert_eq!(first, second);
        assert_eq!(session.get(), Some(first));
    }

    #[tokio::test]
    async fn test_fixed_session() {
        let pinned = ResolvedTime::remote(Utc.with_ymd_and_hms(2026, 1, 29, 8, 0, 0).unwrap());
        let session = TimeSession::fixed(pinned);
        assert_eq!(session.get(), Some(pinned));
        assert_eq!(session.now().await, pinned);
        assert_eq!(session.now().await.origin(), TimeOrigin::Remote);
    }

    #[tokio::test]
    async fn test_separate_sessions_resolve_independently() {
        let a = TimeSession::new(TimeResolver::local_only());
        let first = a.now().await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        let b = TimeSession::new(TimeResolver::local_only());
        assert!(b.now().await.value() > first.value());
    }
}
