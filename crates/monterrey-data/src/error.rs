//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during market data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Provider returned no data for the symbol
    #[error("No price data found for {symbol}")]
    NotFound {
        /// Symbol that was queried
        symbol: String,
    },

    /// Transport or provider failure
    #[error("Market data request failed: {message}")]
    Network {
        /// Provider error description
        message: String,
    },

    /// Invalid symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Invalid date range
    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidDateRange {
        /// Start date of the range
        start: String,
        /// End date of the range
        end: String,
    },

    /// Time conversion error
    #[error("Time conversion error: {0}")]
    TimeConversion(String),

    /// Price series constructed without any points
    #[error("Empty price series for {symbol}")]
    EmptySeries {
        /// Symbol of the rejected series
        symbol: String,
    },

    /// Price series dates are not strictly increasing
    #[error("Price series for {symbol} has non-increasing dates")]
    NonMonotonicDates {
        /// Symbol of the rejected series
        symbol: String,
    },
}

impl From<yahoo_finance_api::YahooError> for DataError {
    fn from(err: yahoo_finance_api::YahooError) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
