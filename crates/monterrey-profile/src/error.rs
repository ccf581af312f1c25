//! Error types for profiling operations.

use thiserror::Error;

/// Result type for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors that can occur while scoring a questionnaire or resolving an
/// allocation.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Answer outside the 1-4 scale
    #[error("Invalid answer {answer}: must be between 1 and 4")]
    InvalidAnswer {
        /// The rejected answer value
        answer: u8,
    },

    /// Section id outside the questionnaire
    #[error("Unknown questionnaire section: {section}")]
    UnknownSection {
        /// The rejected section id
        section: u8,
    },

    /// Question text not part of the given section
    #[error("Unknown question in section {section}: {question}")]
    UnknownQuestion {
        /// Section the answer was recorded against
        section: u8,
        /// The unrecognized question text
        question: String,
    },

    /// Questionnaire scored before every question was answered
    #[error("Section {section} has {missing} unanswered question(s)")]
    IncompleteResponse {
        /// First section with missing answers
        section: u8,
        /// Number of unanswered questions in that section
        missing: usize,
    },

    /// Allocation weights do not sum to exactly 100
    #[error("Allocation weights sum to {sum}%, expected exactly 100%")]
    AllocationSum {
        /// The rejected total
        sum: u32,
    },

    /// Override references an instrument outside the model
    #[error("Instrument {symbol} is not part of the recommended model")]
    UnknownInstrument {
        /// The rejected symbol
        symbol: String,
    },

    /// Override omits one of the model's instruments
    #[error("No weight provided for instrument {symbol}")]
    MissingInstrument {
        /// The symbol without a weight
        symbol: String,
    },
}
