//! Error types for table construction.

/// Errors that can occur when constructing a date-indexed table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Row count does not match the number of dates.
    #[error("row count mismatch: {rows} rows for {dates} dates")]
    RowMismatch {
        /// Number of value rows.
        rows: usize,
        /// Number of dates.
        dates: usize,
    },

    /// Column count does not match the number of symbols.
    #[error("column count mismatch: {cols} columns for {symbols} symbols")]
    ColumnMismatch {
        /// Number of value columns.
        cols: usize,
        /// Number of symbols.
        symbols: usize,
    },

    /// Dates are not strictly ascending.
    #[error("dates not strictly ascending at row {0}")]
    UnsortedDates(usize),

    /// Table has no rows or no columns.
    #[error("empty table")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::RowMismatch { rows: 3, dates: 5 };
        assert!(err.to_string().contains('3') && err.to_string().contains('5'));

        let err = TableError::UnsortedDates(7);
        assert!(err.to_string().contains('7'));
    }
}
