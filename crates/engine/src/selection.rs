//! Low-volatility asset selection.

use ndarray::ArrayView1;
use rotor_primitives::Symbol;

/// Select the `top_k` lowest-volatility assets.
///
/// `symbols` and `volatilities` are parallel: entry `i` of each describes
/// the same asset. Assets with a non-finite volatility are excluded from
/// consideration. Equal volatilities are broken lexicographically by
/// symbol, so the selection is fully deterministic.
///
/// # Returns
/// Indices into the input slices of the selected assets, lowest volatility
/// first, or `None` if fewer than `top_k` assets have a finite volatility.
#[must_use]
pub fn select_lowest_volatility(
    symbols: &[Symbol],
    volatilities: ArrayView1<'_, f64>,
    top_k: usize,
) -> Option<Vec<usize>> {
    debug_assert_eq!(symbols.len(), volatilities.len());

    let mut ranked: Vec<(usize, f64)> = volatilities
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| (i, v))
        .collect();

    if ranked.len() < top_k {
        return None;
    }

    ranked.sort_unstable_by(|a, b| {
        a.1.total_cmp(&b.1).then_with(|| symbols[a.0].cmp(&symbols[b.0]))
    });

    Some(ranked.into_iter().take(top_k).map(|(i, _)| i).collect())
}
