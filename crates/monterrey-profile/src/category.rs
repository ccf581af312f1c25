//! Risk score and risk-category classification.
//!
//! The questionnaire has 67 questions on a 1-4 scale, so totals live in
//! [67, 268]. Category thresholds are fixed constants of the instrument and
//! reproduce the original advisory's comparisons exactly: a total of 67
//! classifies as high tolerance and a total of 267 as medium.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Lowest possible total score (every answer 1).
pub const SCORE_MIN: u16 = 67;

/// Highest possible total score (every answer 4).
pub const SCORE_MAX: u16 = 268;

/// Highest total still classified as high risk tolerance.
pub const HIGH_TOLERANCE_MAX: u16 = 67;

/// Highest total still classified as medium risk tolerance.
pub const MEDIUM_TOLERANCE_MAX: u16 = 267;

/// Total questionnaire score.
///
/// Immutable once computed for a complete response set; a new submission
/// produces a new value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
pub struct RiskScore(u16);

impl RiskScore {
    /// The raw total.
    pub const fn value(self) -> u16 {
        self.0
    }
}

/// Client risk-tolerance bucket derived from the questionnaire score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RiskCategory {
    /// High risk tolerance: growth-oriented, volatile instruments.
    #[display("High risk tolerance")]
    High,

    /// Medium risk tolerance: balanced between equity, credit and gold.
    #[display("Medium risk tolerance")]
    Medium,

    /// Low risk tolerance: capital preservation first.
    #[display("Conservative")]
    Conservative,
}

impl RiskCategory {
    /// Classify a total score into its category.
    pub const fn from_score(score: RiskScore) -> Self {
        if score.0 <= HIGH_TOLERANCE_MAX {
            Self::High
        } else if score.0 <= MEDIUM_TOLERANCE_MAX {
            Self::Medium
        } else {
            Self::Conservative
        }
    }

    /// All categories, in decreasing tolerance order.
    pub const fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Conservative]
    }
}

impl From<RiskScore> for RiskCategory {
    fn from(score: RiskScore) -> Self {
        Self::from_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(67, RiskCategory::High)]
    #[case(68, RiskCategory::Medium)]
    #[case(267, RiskCategory::Medium)]
    #[case(268, RiskCategory::Conservative)]
    fn test_boundary_classification(#[case] total: u16, #[case] expected: RiskCategory) {
        assert_eq!(RiskCategory::from_score(RiskScore::from(total)), expected);
    }

    #[rstest]
    #[case(150, RiskCategory::Medium)]
    #[case(SCORE_MIN, RiskCategory::High)]
    #[case(SCORE_MAX, RiskCategory::Conservative)]
    fn test_interior_classification(#[case] total: u16, #[case] expected: RiskCategory) {
        assert_eq!(RiskCategory::from(RiskScore::from(total)), expected);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(RiskCategory::High.to_string(), "High risk tolerance");
        assert_eq!(RiskCategory::Conservative.to_string(), "Conservative");
        assert_eq!(RiskScore::from(120).to_string(), "120");
    }
}
