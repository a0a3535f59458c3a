use crate::errors::CoreError;
use crate::models::asset::AssetType;
use crate::models::investment::Investment;
use crate::models::profit::ProfitResult;
use crate::models::rate::RateSnapshot;

/// Converts holdings into lira values and derives profit/loss figures.
///
/// Pure business logic — no I/O, no shared state. Rates come in as an
/// already-validated `RateSnapshot`; rate-source errors never originate
/// here and are never swallowed here.
///
/// The profit percentage is the margin relative to the CURRENT value,
/// `(profit / current_value) × 100`, with an explicit guard returning 0
/// when the current value is zero (never NaN or infinity).
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Lira value of `amount` units of `asset` at the snapshot's buy rate.
    ///
    /// Snapshots built through `RateSnapshot::new` always carry every
    /// supported asset; the `UnknownAsset` arm guards data of other
    /// provenance.
    pub fn current_value(
        &self,
        asset: AssetType,
        amount: f64,
        snapshot: &RateSnapshot,
    ) -> Result<f64, CoreError> {
        let rate = snapshot
            .buying_rate(asset)
            .ok_or_else(|| CoreError::UnknownAsset(asset.to_string()))?;
        Ok(amount * rate)
    }

    /// Profit/loss of a position against its frozen purchase value.
    pub fn compute_profit(
        &self,
        asset: AssetType,
        amount: f64,
        initial_value: f64,
        snapshot: &RateSnapshot,
    ) -> Result<ProfitResult, CoreError> {
        let current_value = self.current_value(asset, amount, snapshot)?;
        Ok(Self::profit_from_values(initial_value, current_value))
    }

    /// Profit/loss of a whole set of investments under one snapshot.
    /// Totals purchase and current values first, then applies the same
    /// percentage policy as `compute_profit`.
    pub fn aggregate_profit(
        &self,
        investments: &[Investment],
        snapshot: &RateSnapshot,
    ) -> Result<ProfitResult, CoreError> {
        let mut total_initial = 0.0;
        let mut total_current = 0.0;

        for investment in investments {
            total_initial += investment.value_at_purchase;
            total_current +=
                self.current_value(investment.asset_type, investment.amount, snapshot)?;
        }

        Ok(Self::profit_from_values(total_initial, total_current))
    }

    fn profit_from_values(initial_value: f64, current_value: f64) -> ProfitResult {
        let profit_amount = current_value - initial_value;
        let profit_percentage = if current_value != 0.0 {
            (profit_amount / current_value) * 100.0
        } else {
            0.0
        };

        ProfitResult {
            initial_value,
            current_value,
            profit_amount,
            profit_percentage,
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
