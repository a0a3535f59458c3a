use chrono::{DateTime, Duration, Utc};
use log::debug;
use tokio::sync::Mutex;

use crate::errors::CoreError;
use crate::models::rate::RateSnapshot;
use crate::providers::traits::RateProvider;

struct CacheEntry {
    snapshot: RateSnapshot,
    fetched_at: DateTime<Utc>,
}

/// Memoizes the last successful rate fetch for a time-to-live window.
///
/// Cache strategy:
/// - An entry younger than the TTL is returned without a network call.
/// - An expired (or absent) entry triggers exactly one provider fetch; the
///   mutex is held across the fetch, so concurrent expired callers coalesce
///   into a single outstanding request.
/// - A failed fetch propagates the error and leaves the previous entry
///   untouched: it neither invalidates a still-valid snapshot nor extends
///   its TTL.
///
/// Only this struct writes the cached state; everything else reads through
/// `get_rates`. Share it via `Arc` instead of reaching for globals.
pub struct RateCache {
    provider: Box<dyn RateProvider>,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl RateCache {
    pub fn new(provider: Box<dyn RateProvider>, ttl_secs: u64) -> Self {
        Self {
            provider,
            ttl: Duration::seconds(ttl_secs as i64),
            entry: Mutex::new(None),
        }
    }

    /// Get the current rate snapshot, fetching only on a miss or expiry.
    ///
    /// `now` is passed in rather than read from the clock so freshness is
    /// deterministic under test; `get_current` is the wall-clock wrapper.
    pub async fn get_rates(&self, now: DateTime<Utc>) -> Result<RateSnapshot, CoreError> {
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            let age = now - cached.fetched_at;
            if age < self.ttl {
                debug!("Rate cache hit (age {}s)", age.num_seconds());
                return Ok(cached.snapshot.clone());
            }
        }

        debug!("Rate cache miss — fetching from {}", self.provider.name());
        let snapshot = self.provider.fetch_rates().await?;
        *entry = Some(CacheEntry {
            snapshot: snapshot.clone(),
            fetched_at: now,
        });
        Ok(snapshot)
    }

    /// Wall-clock convenience wrapper around `get_rates`.
    pub async fn get_current(&self) -> Result<RateSnapshot, CoreError> {
        self.get_rates(Utc::now()).await
    }

    /// When the cached snapshot was stored, if any.
    pub async fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.entry.lock().await.as_ref().map(|e| e.fetched_at)
    }

    /// Drop the cached snapshot so the next call re-fetches.
    pub async fn invalidate(&self) {
        *self.entry.lock().await = None;
    }

    /// Name of the underlying rate source (for logs/display).
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
