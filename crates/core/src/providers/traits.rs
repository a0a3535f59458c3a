use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::rate::RateSnapshot;

/// Trait abstraction over the live rate source.
///
/// The production implementation talks to the Truncgil finance API; tests
/// inject counting or failing fakes. If the feed changes shape or goes away,
/// only the implementation behind this seam is replaced — the cache and the
/// valuation path are untouched.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch a fresh snapshot of all supported rates.
    ///
    /// Performs exactly one network read and mutates no shared state
    /// (memoization is the cache's job). Either the whole snapshot is valid
    /// or the call fails — never partial data.
    async fn fetch_rates(&self) -> Result<RateSnapshot, CoreError>;
}
