//! Price table definition.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{Date, ReturnTable, Symbol, TableError};

/// Validate the shape and date ordering of a date-indexed table.
pub(crate) fn check_frame(
    dates: &[Date],
    symbols: &[Symbol],
    values: &Array2<f64>,
) -> Result<(), TableError> {
    if dates.is_empty() || symbols.is_empty() {
        return Err(TableError::Empty);
    }
    if values.nrows() != dates.len() {
        return Err(TableError::RowMismatch { rows: values.nrows(), dates: dates.len() });
    }
    if values.ncols() != symbols.len() {
        return Err(TableError::ColumnMismatch { cols: values.ncols(), symbols: symbols.len() });
    }
    for i in 1..dates.len() {
        if dates[i] <= dates[i - 1] {
            return Err(TableError::UnsortedDates(i));
        }
    }
    Ok(())
}

/// Adjusted closing prices for a universe of assets over a trading-day index.
///
/// Rows are dates (strictly ascending), columns are assets. Prices are
/// expected to be positive; cells may be NaN where an asset has no history
/// yet (e.g. before its listing date). The table is immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTable {
    dates: Vec<Date>,
    symbols: Vec<Symbol>,
    #[serde(skip)]
    values: Array2<f64>,
}

impl PriceTable {
    /// Create a new price table.
    ///
    /// # Errors
    /// Returns `TableError` if the value shape disagrees with the index, or
    /// if the dates are not strictly ascending.
    pub fn new(
        dates: Vec<Date>,
        symbols: Vec<Symbol>,
        values: Array2<f64>,
    ) -> Result<Self, TableError> {
        check_frame(&dates, &symbols, &values)?;
        Ok(Self { dates, symbols, values })
    }

    /// Number of dates (rows).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of assets (columns).
    #[must_use]
    pub const fn n_assets(&self) -> usize {
        self.symbols.len()
    }

    /// Date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Asset symbols, in column order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Price values, rows = dates, columns = assets.
    #[must_use]
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Column position of a symbol, if present.
    #[must_use]
    pub fn position(&self, symbol: &Symbol) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    /// Price series for a single symbol.
    #[must_use]
    pub fn column(&self, symbol: &Symbol) -> Option<ArrayView1<'_, f64>> {
        self.position(symbol).map(|j| self.values.column(j))
    }

    /// Derive the day-over-day percentage-change return table.
    ///
    /// The first row is all zeros (no prior day). A cell whose current or
    /// previous price is non-finite, or whose previous price is not
    /// positive, yields a zero return rather than NaN.
    #[must_use]
    pub fn returns(&self) -> ReturnTable {
        let mut rets = Array2::zeros(self.values.raw_dim());
        for j in 0..self.values.ncols() {
            for i in 1..self.values.nrows() {
                let prev = self.values[[i - 1, j]];
                let cur = self.values[[i, j]];
                if prev.is_finite() && cur.is_finite() && prev > 0.0 {
                    rets[[i, j]] = cur / prev - 1.0;
                }
            }
        }
        ReturnTable::from_parts(self.dates.clone(), self.symbols.clone(), rets)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    use super::*;

    fn dates(n: usize) -> Vec<Date> {
        (0..n)
            .map(|i| Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i as i64))
            .collect()
    }

    #[test]
    fn price_table_lookup() {
        let table = PriceTable::new(
            dates(2),
            vec!["SPY".into(), "XLK".into()],
            array![[100.0, 50.0], [101.0, 49.0]],
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.n_assets(), 2);
        assert_eq!(table.position(&"XLK".into()), Some(1));
        assert_eq!(table.position(&"XLE".into()), None);
        assert_eq!(table.column(&"SPY".into()).unwrap()[1], 101.0);
    }

    #[test]
    fn rejects_shape_mismatch() {
        let err = PriceTable::new(dates(3), vec!["SPY".into()], array![[100.0], [101.0]]);
        assert!(matches!(err, Err(TableError::RowMismatch { rows: 2, dates: 3 })));
    }

    #[test]
    fn rejects_unsorted_dates() {
        let mut ds = dates(3);
        ds.swap(1, 2);
        let err = PriceTable::new(ds, vec!["SPY".into()], array![[1.0], [2.0], [3.0]]);
        assert!(matches!(err, Err(TableError::UnsortedDates(_))));
    }

    #[test]
    fn rejects_empty() {
        let err = PriceTable::new(vec![], vec![], Array2::zeros((0, 0)));
        assert!(matches!(err, Err(TableError::Empty)));
    }

    #[test]
    fn returns_first_row_is_zero() {
        let table = PriceTable::new(
            dates(3),
            vec!["SPY".into()],
            array![[100.0], [110.0], [99.0]],
        )
        .unwrap();

        let rets = table.returns();
        assert_eq!(rets.values()[[0, 0]], 0.0);
        assert_relative_eq!(rets.values()[[1, 0]], 0.10, epsilon = 1e-12);
        assert_relative_eq!(rets.values()[[2, 0]], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn returns_neutralize_missing_prices() {
        let table = PriceTable::new(
            dates(4),
            vec!["XLRE".into()],
            array![[f64::NAN], [f64::NAN], [20.0], [21.0]],
        )
        .unwrap();

        let rets = table.returns();
        // Leading NaN prices produce zero returns, not NaN.
        assert_eq!(rets.values()[[1, 0]], 0.0);
        assert_eq!(rets.values()[[2, 0]], 0.0);
        assert_relative_eq!(rets.values()[[3, 0]], 0.05, epsilon = 1e-12);
    }
}
