//! Backtest output snapshot.

use polars::prelude::*;
use rotor_primitives::{Date, PortfolioReturns, ReturnTable, WeightMatrix};

use crate::EngineError;

/// Immutable snapshot of a completed backtest.
///
/// Pairs the allocation matrix with the per-asset return table and the
/// derived portfolio return series, all sharing the same date index.
#[derive(Debug, Clone)]
pub struct BacktestResults {
    /// Per-date allocation fractions.
    pub weights: WeightMatrix,
    /// Per-asset daily returns.
    pub returns: ReturnTable,
    /// Daily portfolio returns.
    pub portfolio: PortfolioReturns,
}

/// Date column for a DataFrame, from the shared trading-day index.
fn date_column(dates: &[Date]) -> Result<Column, EngineError> {
    let days: Vec<i32> = dates.iter().map(|d| (*d - Date::default()).num_days() as i32).collect();
    let series = Series::new("date".into(), days).cast(&DataType::Date)?;
    Ok(series.into())
}

impl BacktestResults {
    /// Create a new results snapshot.
    #[must_use]
    pub const fn new(
        weights: WeightMatrix,
        returns: ReturnTable,
        portfolio: PortfolioReturns,
    ) -> Self {
        Self { weights, returns, portfolio }
    }

    /// Per-asset returns plus the portfolio series, as a DataFrame.
    ///
    /// Columns: `date`, one return column per asset symbol, `portfolio`.
    ///
    /// # Errors
    /// Returns `EngineError::Polars` if DataFrame assembly fails.
    pub fn returns_dataframe(&self) -> Result<DataFrame, EngineError> {
        let mut columns = vec![date_column(self.returns.dates())?];
        for (j, symbol) in self.returns.symbols().iter().enumerate() {
            columns.push(Column::new(
                symbol.as_str().into(),
                self.returns.values().column(j).to_vec(),
            ));
        }
        columns.push(Column::new("portfolio".into(), self.portfolio.values().to_vec()));
        Ok(DataFrame::new(columns)?)
    }

    /// The allocation matrix as a DataFrame.
    ///
    /// Columns: `date`, one weight column per asset symbol.
    ///
    /// # Errors
    /// Returns `EngineError::Polars` if DataFrame assembly fails.
    pub fn weights_dataframe(&self) -> Result<DataFrame, EngineError> {
        let mut columns = vec![date_column(self.weights.dates())?];
        for (j, symbol) in self.weights.symbols().iter().enumerate() {
            columns.push(Column::new(
                symbol.as_str().into(),
                self.weights.values().column(j).to_vec(),
            ));
        }
        Ok(DataFrame::new(columns)?)
    }
}
