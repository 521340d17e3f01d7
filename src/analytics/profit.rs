//! Leverage-based profit estimate from the average weekly move.

use serde::{Deserialize, Serialize};

/// Compounding periods in the monthly projection (weeks per month).
pub const WEEKS_PER_MONTH: i32 = 4;

/// Calculator inputs. `amount` and `leverage` are taken as given; negative or
/// zero values are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitInput {
    pub amount: f64,
    pub leverage: f64,
}

impl Default for ProfitInput {
    fn default() -> Self {
        Self {
            amount: 0.0,
            leverage: 1.0,
        }
    }
}

impl ProfitInput {
    pub fn new(amount: f64, leverage: f64) -> Self {
        Self { amount, leverage }
    }

    pub fn estimate(&self, average_pct: f64) -> ProfitEstimate {
        estimate_profit(self.amount, self.leverage, average_pct)
    }
}

/// Projected profit. Both figures are `None` when there is no average to
/// project from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitEstimate {
    pub weekly: Option<f64>,
    pub monthly: Option<f64>,
}

impl ProfitEstimate {
    pub fn is_applicable(&self) -> bool {
        self.weekly.is_some()
    }
}

/// weekly = amount × leverage × avg%;
/// monthly = amount × leverage × ((1 + avg%)⁴ − 1).
pub fn estimate_profit(amount: f64, leverage: f64, average_pct: f64) -> ProfitEstimate {
    if average_pct == 0.0 {
        return ProfitEstimate::default();
    }

    let rate = average_pct / 100.0;
    let exposure = amount * leverage;
    let monthly_multiplier = (1.0 + rate).powi(WEEKS_PER_MONTH);

    ProfitEstimate {
        weekly: Some(exposure * rate),
        monthly: Some(exposure * monthly_multiplier - exposure),
    }
}
