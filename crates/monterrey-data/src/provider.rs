//! Provider seam for closing-price retrieval.

use crate::error::Result;
use crate::series::PriceSeries;
use chrono::{DateTime, Utc};
use std::future::Future;

/// Source of closing-price history for a symbol over a date range.
///
/// Implementations must distinguish an empty result
/// ([`DataError::NotFound`](crate::DataError::NotFound)) from a transport
/// failure ([`DataError::Network`](crate::DataError::Network)), and must not
/// retry implicitly; failures are surfaced to the caller.
pub trait PriceProvider {
    /// Fetch closing prices for `symbol` between `start` and `end`.
    fn fetch_closes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<PriceSeries>>;
}
