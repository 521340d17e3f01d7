//! Profit calculator summary.

use crate::analytics::{ProfitEstimate, ProfitInput};
use crate::shared::fmt::num;
use serde::Serialize;

pub const AVERAGE_LABEL: &str = "7-Day Average Change";
pub const WEEKLY_LABEL: &str = "Estimated Profit";
pub const MONTHLY_LABEL: &str = "Estimated Monthly Profit";

/// Formatted calculator output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorSummary {
    pub average_pct: String,
    pub weekly: String,
    pub monthly: String,
}

impl CalculatorSummary {
    pub fn new(input: ProfitInput, average_pct: f64) -> Self {
        let ProfitEstimate { weekly, monthly } = input.estimate(average_pct);
        Self {
            average_pct: num::percent(average_pct),
            weekly: num::currency_or_na(weekly),
            monthly: num::currency_or_na(monthly),
        }
    }

    /// `(label, value)` rows in display order.
    pub fn lines(&self) -> [(&'static str, &str); 3] {
        [
            (AVERAGE_LABEL, self.average_pct.as_str()),
            (WEEKLY_LABEL, self.weekly.as_str()),
            (MONTHLY_LABEL, self.monthly.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_values() {
        let summary = CalculatorSummary::new(ProfitInput::new(1000.0, 2.0), 5.0);
        assert_eq!(summary.average_pct, "5.00%");
        assert_eq!(summary.weekly, "100.00kr");
        assert_eq!(summary.monthly, "431.01kr");
    }

    #[test]
    fn test_summary_without_data() {
        let summary = CalculatorSummary::new(ProfitInput::default(), 0.0);
        assert_eq!(summary.average_pct, "0.00%");
        assert_eq!(summary.weekly, "N/A");
        assert_eq!(summary.monthly, "N/A");
        assert_eq!(summary.lines()[0], ("7-Day Average Change", "0.00%"));
    }
}
