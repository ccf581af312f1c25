#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nortefin/monterrey/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod provider;
pub mod series;
pub mod yahoo;

pub use cache::CachedQuotes;
pub use error::{DataError, Result};
pub use provider::PriceProvider;
pub use series::{PricePoint, PriceSeries};
pub use yahoo::YahooQuoteProvider;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
