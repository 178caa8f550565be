//! Trailing rolling-window statistics.

use ndarray::{Array1, ArrayView1};

use crate::MathError;

/// Trailing simple moving average.
///
/// At each index the window covers the `window` observations ending at and
/// including that index, clipped at the start of the series. Non-finite
/// observations are skipped; if fewer than `min_periods` finite
/// observations are available the output is NaN.
///
/// # Arguments
/// * `series` - Input observations, oldest first
/// * `window` - Trailing window length
/// * `min_periods` - Minimum finite observations for a defined average
///
/// # Errors
/// Returns `MathError` if the series is empty, or if `window` or
/// `min_periods` is zero, or if `min_periods` exceeds `window`.
pub fn rolling_mean(
    series: ArrayView1<'_, f64>,
    window: usize,
    min_periods: usize,
) -> Result<Array1<f64>, MathError> {
    if series.is_empty() {
        return Err(MathError::EmptyData);
    }
    if window == 0 || min_periods == 0 || min_periods > window {
        return Err(MathError::InvalidWindow { window, min_periods });
    }

    let mut out = Array1::from_elem(series.len(), f64::NAN);
    for i in 0..series.len() {
        let start = (i + 1).saturating_sub(window);
        let mut sum = 0.0;
        let mut count = 0usize;
        for &x in series.slice(ndarray::s![start..=i]) {
            if x.is_finite() {
                sum += x;
                count += 1;
            }
        }
        if count >= min_periods {
            out[i] = sum / count as f64;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};
    use rstest::rstest;

    use super::*;

    #[test]
    fn rolling_mean_full_window() {
        let series = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let out = rolling_mean(series.view(), 3, 3).unwrap();

        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_relative_eq!(out[2], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out[4], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn rolling_mean_min_periods_shorter_than_window() {
        let series = array![2.0, 4.0, 6.0, 8.0];
        let out = rolling_mean(series.view(), 3, 1).unwrap();

        // Defined from the first observation onwards.
        assert_relative_eq!(out[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(out[3], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn rolling_mean_skips_nan_observations() {
        let series = array![f64::NAN, 2.0, 4.0];
        let out = rolling_mean(series.view(), 3, 2).unwrap();

        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_relative_eq!(out[2], 3.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(5, 0)]
    #[case(5, 6)]
    fn rolling_mean_rejects_bad_windows(#[case] window: usize, #[case] min_periods: usize) {
        let series = array![1.0, 2.0, 3.0];
        let err = rolling_mean(series.view(), window, min_periods);
        assert!(matches!(err, Err(MathError::InvalidWindow { .. })));
    }

    #[test]
    fn rolling_mean_rejects_empty() {
        let series: Array1<f64> = array![];
        assert!(matches!(rolling_mean(series.view(), 3, 1), Err(MathError::EmptyData)));
    }
}
