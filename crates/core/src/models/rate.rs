use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::asset::AssetType;

/// One asset's quote at a point in time.
///
/// Valuation uses `buying`; `selling` and `change_pct` exist for the
/// market-data display contract and may lag behind on older feed revisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Buy rate in lira per unit (per gram for gold)
    pub buying: f64,
    /// Sell rate in lira per unit
    pub selling: f64,
    /// Daily change in percent (may be negative)
    pub change_pct: f64,
}

/// A point-in-time set of quotes for ALL supported asset types.
///
/// **Immutable once constructed.** The constructor rejects incomplete maps
/// and non-finite or non-positive rates, so downstream consumers never see
/// a partial snapshot or a silently-zero rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    rates: HashMap<AssetType, RateQuote>,
    fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    /// Build a snapshot, validating it whole.
    ///
    /// Fails with `InvalidRate` if any supported asset is missing, or if a
    /// buying/selling rate is NaN, non-finite, or ≤ 0. The change
    /// percentage may be negative but must be finite.
    pub fn new(
        rates: HashMap<AssetType, RateQuote>,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        for asset in AssetType::ALL {
            let quote = rates.get(&asset).ok_or_else(|| CoreError::InvalidRate {
                asset: asset.to_string(),
                value: f64::NAN,
            })?;

            for rate in [quote.buying, quote.selling] {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(CoreError::InvalidRate {
                        asset: asset.to_string(),
                        value: rate,
                    });
                }
            }
            if !quote.change_pct.is_finite() {
                return Err(CoreError::InvalidRate {
                    asset: asset.to_string(),
                    value: quote.change_pct,
                });
            }
        }

        Ok(Self { rates, fetched_at })
    }

    /// Full quote for an asset. Always present for snapshots built through
    /// `new`; the `Option` guards deserialized data of unknown provenance.
    #[must_use]
    pub fn quote(&self, asset: AssetType) -> Option<&RateQuote> {
        self.rates.get(&asset)
    }

    /// Buy rate for an asset (the rate valuation runs on).
    #[must_use]
    pub fn buying_rate(&self, asset: AssetType) -> Option<f64> {
        self.rates.get(&asset).map(|q| q.buying)
    }

    /// When this snapshot was fetched from the source.
    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
