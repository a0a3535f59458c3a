pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use errors::CoreError;
use models::{
    asset::AssetType,
    investment::{Investment, InvestmentSortOrder},
    profit::ProfitResult,
    rate::RateSnapshot,
    settings::Settings,
};
use providers::{traits::RateProvider, truncgil::TruncgilProvider};
use services::{
    historical_service::HistoricalRateService, rate_cache::RateCache,
    refresh_service::RefreshTask, valuation_service::ValuationService,
};

/// Main entry point for the Lira Asset Tracker core library.
///
/// Holds the in-memory investment list and the services that value it.
/// Persistence of the records (and of `Settings`) belongs to the embedding
/// application — `add_investment` hands back the created record for exactly
/// that purpose.
#[must_use]
pub struct AssetTracker {
    investments: Vec<Investment>,
    settings: Settings,
    rate_cache: Arc<RateCache>,
    valuation_service: ValuationService,
    historical_service: HistoricalRateService,
}

impl std::fmt::Debug for AssetTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetTracker")
            .field("investments", &self.investments.len())
            .field("settings", &self.settings)
            .field("rate_source", &self.rate_cache.provider_name())
            .finish()
    }
}

impl AssetTracker {
    /// Create a tracker with default settings and the live Truncgil feed.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a tracker with custom settings (endpoint URL, TTL, cadence).
    pub fn with_settings(settings: Settings) -> Self {
        let provider = Box::new(TruncgilProvider::new(settings.rate_api_url.clone()));
        Self::build(provider, settings)
    }

    /// Create a tracker with an injected rate source. Used by tests and by
    /// embeddings that bring their own feed.
    pub fn with_provider(provider: Box<dyn RateProvider>, settings: Settings) -> Self {
        Self::build(provider, settings)
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Record a purchase of `amount` units of `asset_type` on `date`.
    ///
    /// The rate is resolved live (through the cache) when `date` is today,
    /// and through the deterministic estimator otherwise; rate and lira
    /// value are fixed on the record at this moment and never recalculated.
    /// Returns the created record for the caller to persist.
    pub async fn add_investment(
        &mut self,
        asset_type: AssetType,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Investment, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Amount must be a positive number, got {amount}"
            )));
        }

        let rate = self.rate_for(asset_type, date).await?;
        let investment = Investment::new(asset_type, amount, rate, date);
        self.investments.push(investment.clone());
        Ok(investment)
    }

    /// Remove an investment by its ID. Returns the removed record.
    pub fn remove_investment(&mut self, id: Uuid) -> Result<Investment, CoreError> {
        let idx = self
            .investments
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::InvestmentNotFound(id.to_string()))?;
        Ok(self.investments.remove(idx))
    }

    /// Get a single investment by its ID.
    #[must_use]
    pub fn get_investment(&self, id: Uuid) -> Option<&Investment> {
        self.investments.iter().find(|i| i.id == id)
    }

    /// All investments, in insertion order.
    #[must_use]
    pub fn get_investments(&self) -> &[Investment] {
        &self.investments
    }

    /// Investments of one asset type, in insertion order.
    #[must_use]
    pub fn get_investments_for_asset(&self, asset_type: AssetType) -> Vec<&Investment> {
        self.investments
            .iter()
            .filter(|i| i.asset_type == asset_type)
            .collect()
    }

    /// Investments sorted for display.
    #[must_use]
    pub fn get_investments_sorted(&self, order: &InvestmentSortOrder) -> Vec<&Investment> {
        let mut investments: Vec<&Investment> = self.investments.iter().collect();
        match order {
            InvestmentSortOrder::DateDesc => investments.sort_by(|a, b| b.date.cmp(&a.date)),
            InvestmentSortOrder::DateAsc => investments.sort_by(|a, b| a.date.cmp(&b.date)),
            InvestmentSortOrder::AmountDesc => investments.sort_by(|a, b| {
                b.amount
                    .partial_cmp(&a.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            InvestmentSortOrder::AmountAsc => investments.sort_by(|a, b| {
                a.amount
                    .partial_cmp(&b.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            InvestmentSortOrder::ValueDesc => investments.sort_by(|a, b| {
                b.value_at_purchase
                    .partial_cmp(&a.value_at_purchase)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            InvestmentSortOrder::ValueAsc => investments.sort_by(|a, b| {
                a.value_at_purchase
                    .partial_cmp(&b.value_at_purchase)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        investments
    }

    /// Number of recorded investments.
    #[must_use]
    pub fn investment_count(&self) -> usize {
        self.investments.len()
    }

    /// Sum of all purchase values (lira spent, at purchase-time rates).
    #[must_use]
    pub fn total_invested_value(&self) -> f64 {
        self.investments.iter().map(|i| i.value_at_purchase).sum()
    }

    // ── Rates ───────────────────────────────────────────────────────

    /// Lira rate for `asset_type` on `date`: live through the cache when
    /// `date` is today, otherwise the deterministic estimator. This is the
    /// form-preview contract — the same resolution `add_investment` uses.
    pub async fn rate_for(&self, asset_type: AssetType, date: NaiveDate) -> Result<f64, CoreError> {
        let now = Utc::now();
        if date == now.date_naive() {
            let snapshot = self.rate_cache.get_rates(now).await?;
            snapshot
                .buying_rate(asset_type)
                .ok_or_else(|| CoreError::UnknownAsset(asset_type.to_string()))
        } else {
            Ok(self.historical_service.estimate_rate(asset_type, date))
        }
    }

    /// Current full market snapshot (buying/selling/change per asset) for
    /// the market-data panel. Served from the cache within its TTL.
    pub async fn current_market_snapshot(&self) -> Result<RateSnapshot, CoreError> {
        self.rate_cache.get_current().await
    }

    // ── Profit ──────────────────────────────────────────────────────

    /// Profit/loss of one investment against current rates.
    ///
    /// Callable repeatedly (e.g. on a display timer); never mutates the
    /// investment. Rate-source failures surface unchanged — the caller
    /// keeps whatever it last displayed.
    pub async fn get_profit_snapshot(
        &self,
        investment: &Investment,
    ) -> Result<ProfitResult, CoreError> {
        let snapshot = self.rate_cache.get_current().await?;
        self.valuation_service.compute_profit(
            investment.asset_type,
            investment.amount,
            investment.value_at_purchase,
            &snapshot,
        )
    }

    /// Profit/loss of the whole portfolio under one rate snapshot.
    pub async fn portfolio_profit(&self) -> Result<ProfitResult, CoreError> {
        let snapshot = self.rate_cache.get_current().await?;
        self.valuation_service
            .aggregate_profit(&self.investments, &snapshot)
    }

    // ── Background refresh ──────────────────────────────────────────

    /// Start a cancelable background loop that re-primes the rate cache at
    /// the configured interval. The caller owns the returned handle.
    pub fn start_refresh(&self) -> RefreshTask {
        RefreshTask::spawn(
            self.rate_cache.clone(),
            Duration::from_secs(self.settings.refresh_interval_secs),
        )
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Current settings.
    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(provider: Box<dyn RateProvider>, settings: Settings) -> Self {
        let rate_cache = Arc::new(RateCache::new(provider, settings.cache_ttl_secs));
        Self {
            investments: Vec::new(),
            settings,
            rate_cache,
            valuation_service: ValuationService::new(),
            historical_service: HistoricalRateService::new(),
        }
    }
}

impl Default for AssetTracker {
    fn default() -> Self {
        Self::new()
    }
}
