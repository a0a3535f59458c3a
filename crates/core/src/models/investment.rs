use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::AssetType;

/// Sort order for investment listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentSortOrder {
    /// Newest purchase first (default for display)
    DateDesc,
    /// Oldest purchase first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
    /// Largest purchase value first
    ValueDesc,
    /// Smallest purchase value first
    ValueAsc,
}

/// A single recorded purchase.
///
/// **Important**: the rate and lira value are fixed at creation and never
/// recalculated, even if the historical-rate logic changes later. Profit is
/// always derived against this frozen purchase value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// Unique identifier, generated client-side
    pub id: Uuid,

    /// Which asset was bought
    pub asset_type: AssetType,

    /// Amount of the asset (always positive; grams for gold)
    pub amount: f64,

    /// Lira rate per unit at the moment of purchase
    pub rate_at_purchase: f64,

    /// Lira value at purchase: amount × rate_at_purchase
    pub value_at_purchase: f64,

    /// Date of the purchase (daily granularity)
    pub date: NaiveDate,
}

impl Investment {
    pub fn new(asset_type: AssetType, amount: f64, rate_at_purchase: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_type,
            amount,
            rate_at_purchase,
            value_at_purchase: amount * rate_at_purchase,
            date,
        }
    }
}
