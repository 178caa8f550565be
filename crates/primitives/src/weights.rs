//! Allocation weight matrix definition.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{Date, Symbol, TableError, prices::check_frame};

/// Per-date allocation fractions, aligned with the source price table.
///
/// Each cell holds the non-negative fraction of the portfolio allocated to
/// an asset on a date. On any date the row sums to 0 (cash) or 1 (fully
/// invested); the benchmark column is always 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightMatrix {
    dates: Vec<Date>,
    symbols: Vec<Symbol>,
    #[serde(skip)]
    values: Array2<f64>,
}

impl WeightMatrix {
    /// Create a new weight matrix.
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

    /// Check if the matrix is empty.
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

    /// Weight values, rows = dates, columns = assets.
    #[must_use]
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Allocation row for a single date index.
    #[must_use]
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.values.row(i)
    }

    /// Total allocated fraction on a date index.
    #[must_use]
    pub fn row_sum(&self, i: usize) -> f64 {
        self.values.row(i).sum()
    }

    /// Weight held in a symbol on a date index, if the symbol exists.
    #[must_use]
    pub fn get(&self, i: usize, symbol: &Symbol) -> Option<f64> {
        self.symbols.iter().position(|s| s == symbol).map(|j| self.values[[i, j]])
    }
}
