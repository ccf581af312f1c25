#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nortefin/monterrey/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod align;
pub mod error;
pub mod performance;
pub mod portfolio;

pub use align::AlignedCloses;
pub use error::{Result, StatsError};
pub use performance::{
    DEFAULT_TRAILING_PERIODS, TrailingPeriod, TrailingReturn, normalized_index, portfolio_index,
    trailing_returns,
};
pub use portfolio::{PortfolioStats, TRADING_DAYS_PER_YEAR, compute_stats};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
