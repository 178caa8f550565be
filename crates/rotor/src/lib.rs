//! # rotor
//!
//! A low-volatility sector-rotation backtest engine.
//!
//! This crate provides a unified interface to the rotor workspace.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `math`: Windowed time-series math
//! - `engine`: The weight-construction engine
//! - `cli`: Data-fetching demo surface (`backtest` binary)
//!
//! ## Example
//!
//! ```rust,ignore
//! use rotor::engine::{EngineConfig, WeightEngine};
//! use rotor::primitives::PriceTable;
//!
//! let mut engine = WeightEngine::new(prices, "SPY", EngineConfig::default())?;
//! let results = engine.results()?;
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use rotor_primitives as primitives;

#[cfg(feature = "math")]
#[doc(inline)]
pub use rotor_math as math;

#[cfg(feature = "engine")]
#[doc(inline)]
pub use rotor_engine as engine;
