//! Portfolio return series definition.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::Date;

/// Daily portfolio returns produced by a backtest.
///
/// One value per date: the weighted sum of that date's per-asset returns.
/// Cash days (no allocation) contribute exactly zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReturns {
    dates: Vec<Date>,
    #[serde(skip)]
    values: Array1<f64>,
}

impl PortfolioReturns {
    /// Create a new portfolio return series.
    #[must_use]
    pub fn new(dates: Vec<Date>, values: Array1<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }

    /// Number of dates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the series is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Return values, one per date.
    #[must_use]
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Return on a single date index.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn portfolio_returns_get() {
        let dates: Vec<Date> = (0..3)
            .map(|i| Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i))
            .collect();
        let series = PortfolioReturns::new(dates, array![0.0, 0.01, -0.005]);

        assert_eq!(series.len(), 3);
        assert_eq!(series.get(1), Some(0.01));
        assert_eq!(series.get(3), None);
    }
}
