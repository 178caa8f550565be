//! Daily return table definition.

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::{Date, Symbol};

/// Day-over-day percentage returns, derived from a [`crate::PriceTable`].
///
/// Same shape as the source price table; the first row is all zeros and
/// cells with unusable source prices are zero rather than NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnTable {
    dates: Vec<Date>,
    symbols: Vec<Symbol>,
    #[serde(skip)]
    values: Array2<f64>,
}

impl ReturnTable {
    /// Build from already-validated parts. Only the price table derivation
    /// constructs return tables, so the frame invariants already hold.
    pub(crate) const fn from_parts(
        dates: Vec<Date>,
        symbols: Vec<Symbol>,
        values: Array2<f64>,
    ) -> Self {
        Self { dates, symbols, values }
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

    /// Return values, rows = dates, columns = assets.
    #[must_use]
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Return series for a single symbol.
    #[must_use]
    pub fn column(&self, symbol: &Symbol) -> Option<ArrayView1<'_, f64>> {
        self.symbols.iter().position(|s| s == symbol).map(|j| self.values.column(j))
    }

    /// View of the rows in `[start, end)`.
    ///
    /// # Panics
    /// Panics if `start > end` or `end` exceeds the table length.
    #[must_use]
    pub fn window(&self, start: usize, end: usize) -> ArrayView2<'_, f64> {
        self.values.slice(ndarray::s![start..end, ..])
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn table() -> ReturnTable {
        let dates = (0..3)
            .map(|i| Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i))
            .collect();
        ReturnTable::from_parts(
            dates,
            vec!["SPY".into(), "XLF".into()],
            array![[0.0, 0.0], [0.01, -0.02], [0.03, 0.04]],
        )
    }

    #[test]
    fn column_lookup() {
        let rets = table();
        let xlf = rets.column(&"XLF".into()).unwrap();
        assert_eq!(xlf[2], 0.04);
        assert!(rets.column(&"XLE".into()).is_none());
    }

    #[test]
    fn window_excludes_end_row() {
        let rets = table();
        let w = rets.window(0, 2);
        assert_eq!(w.nrows(), 2);
        assert_eq!(w[[1, 0]], 0.01);
    }
}
