//! Engine configuration.

/// Configuration for the sector-rotation weight engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Trailing window in trading days, used both for the benchmark moving
    /// average and for the volatility ranking.
    pub lookback: usize,
    /// Number of sector assets held simultaneously at equal weight.
    pub top_k: usize,
    /// Risk-aversion parameter retained for interface parity with the
    /// mean-variance strategy variant. Unused by this strategy.
    pub gamma: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookback: 252, // ~1 trading year
            top_k: 2,
            gamma: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.lookback, 252);
        assert_eq!(config.top_k, 2);
        assert_eq!(config.gamma, 0.0);
    }
}
