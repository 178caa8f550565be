//! Error types for windowed operations.

/// Errors that can occur during windowed time-series operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Invalid window specification.
    #[error("invalid window: size {window}, min_periods {min_periods}")]
    InvalidWindow {
        /// Requested window size.
        window: usize,
        /// Requested minimum observation count.
        min_periods: usize,
    },

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::InvalidWindow { window: 0, min_periods: 20 };
        assert!(err.to_string().contains('0') && err.to_string().contains("20"));
    }
}
