use chrono::{Datelike, NaiveDate};

use crate::models::asset::AssetType;

// Synthetic base rates and perturbation steps — documented constants, not
// market data. No real historical-rate source is integrated; past dates are
// valued against these reproducible pseudo-rates.
const GOLD_BASE_RATE: f64 = 2100.0;
const GOLD_DAY_STEP: f64 = 20.0;
const DOLLAR_BASE_RATE: f64 = 32.5;
const DOLLAR_DAY_STEP: f64 = 0.2;
const EURO_BASE_RATE: f64 = 35.2;
const EURO_DAY_STEP: f64 = 0.25;
const MONTHLY_STEP: f64 = 0.02;

/// Deterministic, date-seeded rate estimator for non-current dates.
///
/// Purely a function of (asset, date) — no I/O, no state. The same date
/// always yields the same rate, across runs and processes, so a purchase
/// recorded on a past date revalues identically forever.
pub struct HistoricalRateService;

impl HistoricalRateService {
    pub fn new() -> Self {
        Self
    }

    /// Estimated lira rate for `asset` on `date`.
    ///
    /// The day-of-month perturbs a fixed base rate, and the ZERO-BASED
    /// month (January = 0) applies a small multiplicative factor.
    #[must_use]
    pub fn estimate_rate(&self, asset: AssetType, date: NaiveDate) -> f64 {
        let day = date.day();

        let base = match asset {
            AssetType::Gold => GOLD_BASE_RATE + f64::from(day % 10) * GOLD_DAY_STEP,
            AssetType::Dollar => DOLLAR_BASE_RATE + f64::from(day % 5) * DOLLAR_DAY_STEP,
            AssetType::Euro => EURO_BASE_RATE + f64::from(day % 5) * EURO_DAY_STEP,
        };

        let monthly_factor = 1.0 + f64::from(date.month0() % 3) * MONTHLY_STEP;
        base * monthly_factor
    }
}

impl Default for HistoricalRateService {
    fn default() -> Self {
        Self::new()
    }
}
