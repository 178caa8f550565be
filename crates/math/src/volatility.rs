//! Volatility estimation over explicit window views.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Sample standard deviation (ddof = 1) of a window.
///
/// Non-finite observations are skipped. Returns NaN if fewer than two
/// finite observations are present.
#[must_use]
pub fn sample_std(window: ArrayView1<'_, f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &x in window {
        if x.is_finite() {
            sum += x;
            count += 1;
        }
    }
    if count < 2 {
        return f64::NAN;
    }

    let mean = sum / count as f64;
    let mut ss = 0.0;
    for &x in window {
        if x.is_finite() {
            ss += (x - mean) * (x - mean);
        }
    }
    (ss / (count - 1) as f64).sqrt()
}

/// Sample standard deviation of each column of a window.
///
/// Rows are observations, columns are assets. The output has one entry per
/// column; columns with fewer than two finite observations yield NaN.
#[must_use]
pub fn column_volatility(window: ArrayView2<'_, f64>) -> Array1<f64> {
    Array1::from_iter(window.columns().into_iter().map(sample_std))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn sample_std_matches_hand_computation() {
        let window = array![1.0, 2.0, 3.0, 4.0];
        // Sample variance of [1,2,3,4] is 5/3.
        assert_relative_eq!(sample_std(window.view()), (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn sample_std_constant_series_is_zero() {
        let window = array![0.5, 0.5, 0.5];
        assert_relative_eq!(sample_std(window.view()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sample_std_skips_nan() {
        let with_nan = array![1.0, f64::NAN, 3.0];
        let without = array![1.0, 3.0];
        assert_relative_eq!(
            sample_std(with_nan.view()),
            sample_std(without.view()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn sample_std_too_few_observations() {
        assert!(sample_std(array![1.0].view()).is_nan());
        assert!(sample_std(array![1.0, f64::NAN].view()).is_nan());
    }

    #[test]
    fn column_volatility_per_column() {
        let window = array![[0.0, 1.0], [0.0, 2.0], [0.0, 3.0]];
        let vols = column_volatility(window.view());

        assert_relative_eq!(vols[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(vols[1], 1.0, epsilon = 1e-12);
    }
}
