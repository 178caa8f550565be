//! Error types for the weight engine.

use rotor_math::MathError;
use rotor_primitives::TableError;

/// Errors that can occur when configuring or running the weight engine.
///
/// Configuration problems surface at construction. Data-quality problems
/// (NaN prices, short history) never surface as errors; the engine
/// neutralizes them by staying in cash on the affected dates.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Benchmark symbol is not a column of the price table.
    #[error("unknown benchmark symbol: {0}")]
    UnknownBenchmark(String),

    /// `top_k` is zero or exceeds the sector universe.
    #[error("invalid top_k: {top_k} (sector universe has {sectors} assets)")]
    InvalidTopK {
        /// Requested number of holdings.
        top_k: usize,
        /// Number of non-benchmark assets available.
        sectors: usize,
    },

    /// Lookback window must cover at least one trading day.
    #[error("invalid lookback: window must be at least 1 trading day")]
    InvalidLookback,

    /// Table construction error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Windowed math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// DataFrame export error.
    #[error("data export error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
