use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::AppState;

/// In-memory fixed-window limiter, keyed by caller. Single instance only.
#[derive(Clone)]
pub struct RateLimitState {
    entries: Arc<Mutex<HashMap<String, RateLimitEntry>>>,
    max_requests: u32,
    window: Duration,
}

struct RateLimitEntry {
    count: u32,
    window_start: Instant,
}

impl RateLimitState {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    /// `Ok(remaining)` when allowed, `Err(retry_after)` when limited.
    pub async fn check(&self, key: &str) -> Result<u32, Duration> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        let entry = entries.entry(key.to_string()).or_insert(RateLimitEntry {
            count: 0,
            window_start: now,
        });

        if now.duration_since(entry.window_start) > self.window {
            entry.count = 0;
            entry.window_start = now;
        }

        if entry.count >= self.max_requests {
            let retry_after = self
                .window
                .saturating_sub(now.duration_since(entry.window_start));
            return Err(retry_after);
        }

        entry.count += 1;
        Ok(self.max_requests - entry.count)
    }

    /// Drop entries whose window ended long ago.
    pub async fn cleanup(&self) {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        let keep_for = self.window * 2;

        entries.retain(|_, entry| now.duration_since(entry.window_start) < keep_for);
    }

    pub fn spawn_cleanup_worker(&self) {
        let limiter = self.clone();
        let period = self.window.max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                limiter.cleanup().await;
            }
        });
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

/// Rate limiting middleware for the auth endpoints, keyed on IP + path.
pub async fn rate_limit_auth(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let path = req.uri().path().to_string();
    let key = format!("{}:{}", ip, path);

    match state.rate_limiter.check(&key).await {
        Ok(remaining) => {
            tracing::debug!(ip = %ip, path = %path, remaining = remaining, "Rate limit check passed");
            Ok(next.run(req).await)
        }
        Err(retry_after) => {
            tracing::warn!(
                ip = %ip,
                path = %path,
                retry_after_secs = retry_after.as_secs(),
                "Rate limit exceeded"
            );
            Err(AppError::RateLimited)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rate_limit_allows_under_limit() {
        let limiter = RateLimitState::new(3, 60);

        assert_eq!(limiter.check("k").await, Ok(2));
        assert_eq!(limiter.check("k").await, Ok(1));
        assert_eq!(limiter.check("k").await, Ok(0));
    }

    #[tokio::test]
    async fn test_rate_limit_blocks_over_limit() {
        let limiter = RateLimitState::new(2, 60);
        let _ = limiter.check("k").await;
        let _ = limiter.check("k").await;

        let retry_after = limiter.check("k").await.unwrap_err();
        assert!(retry_after <= Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_different_keys_have_separate_limits() {
        let limiter = RateLimitState::new(1, 60);
        assert!(limiter.check("1.2.3.4:/api/auth/login").await.is_ok());
        assert!(limiter.check("1.2.3.4:/api/auth/login").await.is_err());
        assert!(limiter.check("1.2.3.4:/api/auth/register").await.is_ok());
    }

    #[tokio::test]
    async fn test_window_resets() {
        let limiter = RateLimitState::new(1, 0);
        assert!(limiter.check("k").await.is_ok());
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(limiter.check("k").await.is_ok());
    }

    #[tokio::test]
    async fn test_cleanup_drops_stale_entries() {
        let limiter = RateLimitState::new(5, 0);
        let _ = limiter.check("a").await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        limiter.cleanup().await;
        assert_eq!(limiter.len().await, 0);
    }
}
