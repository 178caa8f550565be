#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rotor-quant/rotor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod rolling;
pub use rolling::rolling_mean;

mod volatility;
pub use volatility::{column_volatility, sample_std};

mod error;
pub use error::MathError;
