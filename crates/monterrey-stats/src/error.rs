//! Error types for statistics operations.

use thiserror::Error;

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while computing portfolio statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Too few aligned observations
    #[error("Insufficient aligned data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of aligned observations
        required: usize,
        /// Aligned observations actually available
        actual: usize,
    },

    /// Allocation references an instrument without a price series
    #[error("No price series supplied for {symbol}")]
    MissingSeries {
        /// The symbol without data
        symbol: String,
    },

    /// Statistics requested for an allocation with no instruments
    #[error("Allocation holds no instruments")]
    EmptyAllocation,
}
