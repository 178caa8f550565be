#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rotor-quant/rotor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::EngineConfig;

mod selection;
pub use selection::select_lowest_volatility;

mod engine;
pub use engine::{EngineState, MIN_MA_PERIODS, WeightEngine};

mod results;
pub use results::BacktestResults;

mod error;
pub use error::EngineError;
