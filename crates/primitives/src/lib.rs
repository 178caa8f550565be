#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rotor-quant/rotor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod asset;
pub use asset::Symbol;

mod error;
pub use error::TableError;

mod prices;
pub use prices::PriceTable;

mod returns;
pub use returns::ReturnTable;

mod weights;
pub use weights::WeightMatrix;

mod portfolio;
pub use portfolio::PortfolioReturns;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
