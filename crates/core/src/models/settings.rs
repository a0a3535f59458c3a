use serde::{Deserialize, Serialize};

/// Default rate feed endpoint.
pub const DEFAULT_RATE_API_URL: &str = "https://finance.truncgil.com/api/today.json";

/// How long a fetched rate snapshot stays fresh (5 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;

/// How often the background refresh task re-primes the cache (5 minutes).
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5 * 60;

/// Library configuration. The endpoint URL is configuration, not behavior —
/// tests and alternative deployments point it elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Rate feed endpoint (HTTP GET, JSON body)
    pub rate_api_url: String,

    /// Cache time-to-live in seconds
    pub cache_ttl_secs: u64,

    /// Background refresh cadence in seconds
    pub refresh_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rate_api_url: DEFAULT_RATE_API_URL.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}
