//! Derived numbers over fetched predictions: the average weekly move and the
//! profit projection built on it.

pub mod average;
pub mod profit;

pub use average::average_abs_pct_change;
pub use profit::{estimate_profit, ProfitEstimate, ProfitInput};
