use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use crate::{Transport, VidraError};

/// Upper bound on distinct pool entries tried per call.
///
/// Balances availability (skip a dead mirror) against latency (don't walk
/// the whole pool on every call).
pub const MAX_ROTATION_ATTEMPTS: usize = 3;

/// Round-robin failover over an ordered pool of interchangeable mirrors.
///
/// The preferred cursor names the mirror each call starts from and is moved
/// only when a call succeeds on a different mirror, so future calls start
/// from one known to be currently healthy. The cursor is owned by this
/// instance; tests construct isolated rotators rather than sharing process
/// state.
///
/// Reads and the post-success store use relaxed ordering: two racing calls
/// can at worst each pay one extra failed attempt, which does not justify a
/// lock.
pub struct EndpointRotator {
    pool: Vec<Url>,
    preferred: AtomicUsize,
    transport: Arc<dyn Transport>,
}

impl EndpointRotator {
    /// Build a rotator over `pool`, starting at the first entry.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the pool is empty.
    pub fn new(pool: Vec<Url>, transport: Arc<dyn Transport>) -> Result<Self, VidraError> {
        if pool.is_empty() {
            return Err(VidraError::InvalidArg(
                "endpoint pool must not be empty".to_string(),
            ));
        }
        Ok(Self {
            pool,
            preferred: AtomicUsize::new(0),
            transport,
        })
    }

    /// Index of the mirror the next call will start from.
    #[must_use]
    pub fn preferred(&self) -> usize {
        self.preferred.load(Ordering::Relaxed)
    }

    /// Base URL of the currently preferred mirror.
    #[must_use]
    pub fn preferred_base(&self) -> &Url {
        &self.pool[self.preferred() % self.pool.len()]
    }

    /// Fetch `path` (a root-relative path plus query string) with bounded
    /// failover across the pool.
    ///
    /// Tries up to [`MAX_ROTATION_ATTEMPTS`] distinct entries in round-robin
    /// order starting from the preferred cursor and returns the first
    /// successful payload.
    ///
    /// # Errors
    /// Returns `AllInstancesExhausted` when every attempted mirror failed;
    /// the preferred cursor is left untouched in that case.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "vidra::rotator",
            skip(self),
            fields(preferred = self.preferred()),
        )
    )]
    pub async fn fetch_with_rotation(&self, path: &str) -> Result<String, VidraError> {
        let start = self.preferred.load(Ordering::Relaxed) % self.pool.len();
        let attempts = MAX_ROTATION_ATTEMPTS.min(self.pool.len());

        for attempt in 0..attempts {
            let idx = (start + attempt) % self.pool.len();
            let url = self.pool[idx]
                .join(path)
                .map_err(|e| VidraError::InvalidArg(format!("bad path {path}: {e}")))?;
            match self.transport.get(&url).await {
                Ok(body) => {
                    if idx != start {
                        self.preferred.store(idx, Ordering::Relaxed);
                    }
                    return Ok(body);
                }
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target: "vidra::rotator",
                        mirror = %self.pool[idx],
                        error = %_e,
                        "mirror failed, rotating"
                    );
                }
            }
        }

        Err(VidraError::AllInstancesExhausted { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted transport: each URL prefix listed in `failures` errors out,
    /// everything else echoes its own URL back.
    struct Scripted {
        failures: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn failing(failures: Vec<&'static str>) -> Self {
            Self {
                failures,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn get(&self, url: &Url) -> Result<String, VidraError> {
            self.calls.lock().unwrap().push(url.to_string());
            if self.failures.iter().any(|f| url.as_str().starts_with(f)) {
                Err(VidraError::transport(url.as_str(), "scripted failure"))
            } else {
                Ok(url.to_string())
            }
        }
    }

    fn pool() -> Vec<Url> {
        vec![
            Url::parse("https://a.example").unwrap(),
            Url::parse("https://b.example").unwrap(),
            Url::parse("https://c.example").unwrap(),
            Url::parse("https://d.example").unwrap(),
        ]
    }

    #[tokio::test]
    async fn first_mirror_success_keeps_cursor() {
        let t = Arc::new(Scripted::failing(vec![]));
        let r = EndpointRotator::new(pool(), t).unwrap();
        let body = r.fetch_with_rotation("/trending?region=US").await.unwrap();
        assert!(body.starts_with("https://a.example/trending"));
        assert_eq!(r.preferred(), 0);
    }

    #[tokio::test]
    async fn failover_updates_cursor_to_healthy_mirror() {
        let t = Arc::new(Scripted::failing(vec!["https://a.example", "https://b.example"]));
        let r = EndpointRotator::new(pool(), t.clone()).unwrap();
        let body = r.fetch_with_rotation("/trending?region=US").await.unwrap();
        assert!(body.starts_with("https://c.example/"));
        assert_eq!(r.preferred(), 2);
        // The next call starts directly at the healthy mirror.
        r.fetch_with_rotation("/suggestions?query=x").await.unwrap();
        let calls = t.calls.lock().unwrap();
        assert!(calls.last().unwrap().starts_with("https://c.example/"));
    }

    #[tokio::test]
    async fn exhaustion_is_bounded_and_leaves_cursor() {
        let t = Arc::new(Scripted::failing(vec!["https://"]));
        let r = EndpointRotator::new(pool(), t.clone()).unwrap();
        let err = r.fetch_with_rotation("/trending").await.unwrap_err();
        assert!(matches!(
            err,
            VidraError::AllInstancesExhausted { attempts: 3 }
        ));
        assert_eq!(r.preferred(), 0);
        // Only 3 of the 4 mirrors were tried.
        assert_eq!(t.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn small_pool_caps_attempts_at_pool_size() {
        let t = Arc::new(Scripted::failing(vec!["https://"]));
        let small = vec![
            Url::parse("https://a.example").unwrap(),
            Url::parse("https://b.example").unwrap(),
        ];
        let r = EndpointRotator::new(small, t).unwrap();
        let err = r.fetch_with_rotation("/x").await.unwrap_err();
        assert!(matches!(
            err,
            VidraError::AllInstancesExhausted { attempts: 2 }
        ));
    }

    #[test]
    fn empty_pool_is_rejected() {
        let t: Arc<dyn Transport> = Arc::new(Scripted::failing(vec![]));
        assert!(matches!(
            EndpointRotator::new(vec![], t),
            Err(VidraError::InvalidArg(_))
        ));
    }
}
