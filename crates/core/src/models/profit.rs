use serde::{Deserialize, Serialize};

/// Derived profit/loss figures for one investment (or a whole portfolio)
/// against a current rate snapshot.
///
/// Never persisted — recomputed on every valuation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitResult {
    /// Lira value at purchase
    pub initial_value: f64,

    /// Lira value at the current rate
    pub current_value: f64,

    /// current_value − initial_value (negative on a loss)
    pub profit_amount: f64,

    /// Margin relative to the CURRENT value:
    /// (profit_amount / current_value) × 100, or 0 when current_value is 0.
    pub profit_percentage: f64,
}
