//! The sector-rotation weight engine.

use ndarray::{Array1, Array2, Axis};
use rotor_math::{column_volatility, rolling_mean};
use rotor_primitives::{PortfolioReturns, PriceTable, ReturnTable, Symbol, WeightMatrix};

use crate::{BacktestResults, EngineConfig, EngineError, select_lowest_volatility};

/// Minimum observations before the benchmark moving average is defined.
///
/// The trailing average tolerates a shorter window at the start of history,
/// down to this many observations, so the trend signal exists before a full
/// lookback has elapsed.
pub const MIN_MA_PERIODS: usize = 20;

/// Computation stage of a [`WeightEngine`].
///
/// Transitions are one-directional and triggered by the first call that
/// needs the stage's output; there is no reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Only price data (and the derived return table) is present.
    Uninitialized,
    /// The weight matrix has been computed and cached.
    WeightsComputed,
    /// Both the weight matrix and the portfolio return series are cached.
    ReturnsComputed,
}

/// Long-only sector-rotation backtest engine.
///
/// Holds an immutable price table, a benchmark column used only as a trend
/// signal, and lazily computed, cached results. On each trading day past
/// the warm-up period the engine is either fully invested (equal weight in
/// the `top_k` sector assets with the lowest trailing return volatility,
/// provided the benchmark trades at or above its trailing moving average)
/// or entirely in cash.
#[derive(Debug, Clone)]
pub struct WeightEngine {
    prices: PriceTable,
    returns: ReturnTable,
    benchmark: Symbol,
    benchmark_idx: usize,
    config: EngineConfig,
    weights: Option<WeightMatrix>,
    portfolio: Option<PortfolioReturns>,
}

impl WeightEngine {
    /// Create a new engine over an immutable price history.
    ///
    /// The return table is derived immediately; weights and portfolio
    /// returns are computed lazily on first request.
    ///
    /// # Errors
    /// Returns `EngineError` if the benchmark is not a column of the price
    /// table, if the lookback window is zero, or if `top_k` is zero or
    /// exceeds the number of non-benchmark assets.
    pub fn new(
        prices: PriceTable,
        benchmark: impl Into<Symbol>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let benchmark = benchmark.into();
        let benchmark_idx = prices
            .position(&benchmark)
            .ok_or_else(|| EngineError::UnknownBenchmark(benchmark.to_string()))?;

        if config.lookback == 0 {
            return Err(EngineError::InvalidLookback);
        }

        let sectors = prices.n_assets() - 1;
        if config.top_k == 0 || config.top_k > sectors {
            return Err(EngineError::InvalidTopK { top_k: config.top_k, sectors });
        }

        let returns = prices.returns();
        Ok(Self {
            prices,
            returns,
            benchmark,
            benchmark_idx,
            config,
            weights: None,
            portfolio: None,
        })
    }

    /// Current computation stage.
    #[must_use]
    pub const fn state(&self) -> EngineState {
        match (&self.weights, &self.portfolio) {
            (None, _) => EngineState::Uninitialized,
            (Some(_), None) => EngineState::WeightsComputed,
            (Some(_), Some(_)) => EngineState::ReturnsComputed,
        }
    }

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Benchmark symbol used for the trend filter.
    #[must_use]
    pub const fn benchmark(&self) -> &Symbol {
        &self.benchmark
    }

    /// The input price table.
    #[must_use]
    pub const fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// The derived daily return table.
    #[must_use]
    pub const fn returns(&self) -> &ReturnTable {
        &self.returns
    }

    /// The per-date allocation matrix, computing it on first call.
    ///
    /// Deterministic and idempotent: repeated calls return the same cached
    /// matrix.
    ///
    /// # Errors
    /// Returns `EngineError` if weight computation fails.
    pub fn weights(&mut self) -> Result<&WeightMatrix, EngineError> {
        if self.weights.is_none() {
            let computed = compute_weight_matrix(
                &self.prices,
                &self.returns,
                self.benchmark_idx,
                &self.config,
            )?;
            self.weights = Some(computed);
        }
        match &self.weights {
            Some(weights) => Ok(weights),
            None => unreachable!("weight cache populated above"),
        }
    }

    /// The daily portfolio return series, computing weights first if
    /// needed.
    ///
    /// # Errors
    /// Returns `EngineError` if weight computation fails.
    pub fn portfolio_returns(&mut self) -> Result<&PortfolioReturns, EngineError> {
        if self.portfolio.is_none() {
            self.weights()?;
            let computed = match &self.weights {
                Some(weights) => compute_portfolio_series(&self.returns, weights),
                None => unreachable!("weight cache populated above"),
            };
            self.portfolio = Some(computed);
        }
        match &self.portfolio {
            Some(portfolio) => Ok(portfolio),
            None => unreachable!("portfolio cache populated above"),
        }
    }

    /// An owned snapshot of the full backtest output, computing any
    /// missing stage on demand.
    ///
    /// # Errors
    /// Returns `EngineError` if weight computation fails.
    pub fn results(&mut self) -> Result<BacktestResults, EngineError> {
        self.portfolio_returns()?;
        match (&self.weights, &self.portfolio) {
            (Some(weights), Some(portfolio)) => Ok(BacktestResults::new(
                weights.clone(),
                self.returns.clone(),
                portfolio.clone(),
            )),
            _ => unreachable!("both caches populated above"),
        }
    }
}

/// Build the allocation matrix for the full date range.
///
/// Pure function of the immutable inputs. Warm-up rows (the first
/// `lookback` dates) stay all-zero; on later dates the benchmark trend
/// filter gates between cash and an equal-weight low-volatility selection.
/// A non-finite benchmark price or moving average fails the filter, so bad
/// data resolves to cash rather than NaN weights.
fn compute_weight_matrix(
    prices: &PriceTable,
    returns: &ReturnTable,
    benchmark_idx: usize,
    config: &EngineConfig,
) -> Result<WeightMatrix, EngineError> {
    let n_dates = prices.len();
    let n_assets = prices.n_assets();
    let lookback = config.lookback;

    let sector_cols: Vec<usize> = (0..n_assets).filter(|&j| j != benchmark_idx).collect();
    let sector_syms: Vec<Symbol> =
        sector_cols.iter().map(|&j| prices.symbols()[j].clone()).collect();
    // Contiguous copy of the sector return columns, so the per-date
    // volatility windows are plain row slices.
    let sector_returns = returns.values().select(Axis(1), &sector_cols);

    let bench = prices.values().column(benchmark_idx);
    let bench_ma = rolling_mean(bench, lookback, MIN_MA_PERIODS.min(lookback))?;

    let mut values = Array2::zeros((n_dates, n_assets));
    let invested_weight = 1.0 / config.top_k as f64;

    for i in lookback..n_dates {
        let price = bench[i];
        let ma = bench_ma[i];

        // Trend filter: below the trailing average, or an undefined
        // comparison, means cash for the day.
        if !price.is_finite() || !ma.is_finite() || price < ma {
            continue;
        }

        // Volatility over the window ending the day before, never
        // including day i itself.
        let window = sector_returns.slice(ndarray::s![i - lookback..i, ..]);
        let vols = column_volatility(window);

        // Too few usable candidates also means cash.
        let Some(selected) = select_lowest_volatility(&sector_syms, vols.view(), config.top_k)
        else {
            continue;
        };

        for local in selected {
            values[[i, sector_cols[local]]] = invested_weight;
        }
    }

    // The benchmark column is never written, so it is already zero.
    values.mapv_inplace(|w| if w.is_finite() { w } else { 0.0 });

    Ok(WeightMatrix::new(prices.dates().to_vec(), prices.symbols().to_vec(), values)?)
}

/// Per-date dot product of return row and weight row.
fn compute_portfolio_series(returns: &ReturnTable, weights: &WeightMatrix) -> PortfolioReturns {
    let mut values = Array1::zeros(returns.len());
    for i in 0..returns.len() {
        values[i] = returns.values().row(i).dot(&weights.row(i));
    }
    PortfolioReturns::new(returns.dates().to_vec(), values)
}
