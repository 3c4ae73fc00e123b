//! Device position source for departure-airport fallback.
//!
//! [`LocationProvider`] abstracts wherever a position can come from: a
//! device sensor bridge, an IP-geolocation service, a fixed CLI flag. The
//! resolver only ever sees the trait, wrapped in an explicit timeout and an
//! optional staleness cache.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use skysearch_core::Coordinates;
use thiserror::Error;
use tokio::sync::Mutex;

/// Failure modes of a position read. Each maps to its own user-facing
/// message; the distinction matters because "denied" is actionable by the
/// user while "unavailable" is not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("device position unavailable")]
    PositionUnavailable,
    #[error("timed out waiting for a position fix")]
    Timeout,
    #[error("geolocation failed: {0}")]
    Unknown(String),
}

impl GeoError {
    /// The message shown to the user when this failure ends up blocking
    /// departure resolution.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::PermissionDenied => {
                "Location access was denied, so we couldn't find your nearest airport."
            }
            GeoError::PositionUnavailable => {
                "Your position couldn't be determined, so we couldn't find your nearest airport."
            }
            GeoError::Timeout => {
                "Finding your location took too long, so we couldn't find your nearest airport."
            }
            GeoError::Unknown(_) => {
                "Something went wrong while finding your location."
            }
        }
    }
}

/// An asynchronous source of the device's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeoError>;
}

/// Reads a position with an explicit deadline; elapsing maps to
/// [`GeoError::Timeout`].
///
/// # Errors
///
/// Returns the provider's own error, or [`GeoError::Timeout`] when `timeout`
/// elapses first.
pub async fn locate_with_timeout(
    provider: &dyn LocationProvider,
    timeout: Duration,
) -> Result<Coordinates, GeoError> {
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(result) => result,
        Err(_) => Err(GeoError::Timeout),
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    at: Instant,
    position: Coordinates,
}

/// Memoizes a successful position read for a staleness window.
///
/// A fresh cached fix short-circuits the inner provider entirely; failures
/// are never cached, so the next call retries the inner read.
pub struct CachedLocationProvider<P> {
    inner: P,
    max_age: Duration,
    cached: Mutex<Option<CachedFix>>,
}

impl<P> CachedLocationProvider<P> {
    pub fn new(inner: P, max_age: Duration) -> Self {
        Self {
            inner,
            max_age,
            cached: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<P: LocationProvider> LocationProvider for CachedLocationProvider<P> {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        let mut cached = self.cached.lock().await;
        if let Some(fix) = *cached {
            if fix.at.elapsed() < self.max_age {
                return Ok(fix.position);
            }
        }
        let position = self.inner.current_position().await?;
        *cached = Some(CachedFix {
            at: Instant::now(),
            position,
        });
        Ok(position)
    }
}

/// Always returns the same position. Used by the CLI's `--lat`/`--lng`
/// flags and by tests.
pub struct StaticLocationProvider(pub Coordinates);

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Ok(self.0)
    }
}

/// Always fails with [`GeoError::PermissionDenied`]. Used where no position
/// source exists, so resolution exercises its terminal fallback path.
pub struct DeniedLocationProvider;

#[async_trait]
impl LocationProvider for DeniedLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Err(GeoError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    /// Counts reads; fails the first `fail_first` of them.
    struct CountingProvider {
        calls: AtomicU32,
        fail_first: u32,
    }

    impl CountingProvider {
        fn new(fail_first: u32) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail_first,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LocationProvider for &CountingProvider {
        async fn current_position(&self) -> Result<Coordinates, GeoError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n <= self.fail_first {
                Err(GeoError::PositionUnavailable)
            } else {
                Ok(Coordinates::new(22.3, 114.2))
            }
        }
    }

    #[tokio::test]
    async fn cache_short_circuits_within_window() {
        let inner = CountingProvider::new(0);
        let cached = CachedLocationProvider::new(&inner, Duration::from_secs(300));

        let first = cached.current_position().await.expect("first read");
        let second = cached.current_position().await.expect("second read");

        assert_eq!(first, second);
        assert_eq!(inner.calls(), 1, "second read must come from the cache");
    }

    #[tokio::test]
    async fn zero_max_age_always_rereads() {
        let inner = CountingProvider::new(0);
        let cached = CachedLocationProvider::new(&inner, Duration::ZERO);

        cached.current_position().await.expect("first read");
        cached.current_position().await.expect("second read");

        assert_eq!(inner.calls(), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let inner = CountingProvider::new(1);
        let cached = CachedLocationProvider::new(&inner, Duration::from_secs(300));

        let first = cached.current_position().await;
        assert_eq!(first, Err(GeoError::PositionUnavailable));

        let second = cached.current_position().await;
        assert!(second.is_ok(), "failure must not poison the cache");
        assert_eq!(inner.calls(), 2);
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        struct NeverResolves;

        #[async_trait]
        impl LocationProvider for NeverResolves {
            async fn current_position(&self) -> Result<Coordinates, GeoError> {
                std::future::pending().await
            }
        }

        let result = locate_with_timeout(&NeverResolves, Duration::from_millis(10)).await;
        assert_eq!(result, Err(GeoError::Timeout));
    }

    #[tokio::test]
    async fn provider_error_passes_through_the_timeout_wrapper() {
        let result =
            locate_with_timeout(&DeniedLocationProvider, Duration::from_secs(10)).await;
        assert_eq!(result, Err(GeoError::PermissionDenied));
    }

    #[test]
    fn each_failure_mode_has_a_distinct_message() {
        let messages = [
            GeoError::PermissionDenied.user_message(),
            GeoError::PositionUnavailable.user_message(),
            GeoError::Timeout.user_message(),
            GeoError::Unknown("boom".to_owned()).user_message(),
        ];
        let unique: std::collections::HashSet<_> = messages.iter().collect();
        assert_eq!(unique.len(), messages.len());
    }
}
