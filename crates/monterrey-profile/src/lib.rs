#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nortefin/monterrey/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod category;
pub mod error;
pub mod questionnaire;

pub use allocation::{Allocation, AllocationEntry, AllocationModel, Instrument, TOTAL_WEIGHT_PCT};
pub use category::{RiskCategory, RiskScore, SCORE_MAX, SCORE_MIN};
pub use error::{ProfileError, Result};
pub use questionnaire::{QuestionnaireResponse, Section, sections};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
