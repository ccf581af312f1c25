//! Advice report generation.

use chrono::{DateTime, Utc};
use monterrey_growth::GrowthTrajectory;
use monterrey_profile::{Allocation, RiskCategory, RiskScore};
use monterrey_stats::PortfolioStats;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Final values of a growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Projection length in years.
    pub horizon_years: u32,
    /// Final wealth with returns compounded.
    pub final_compounded: f64,
    /// Final wealth from contributions alone.
    pub final_contributions_only: f64,
}

impl ProjectionSummary {
    /// Summarize a trajectory's endpoints.
    pub fn from_trajectory(trajectory: &GrowthTrajectory, horizon_years: u32) -> Self {
        Self {
            horizon_years,
            final_compounded: trajectory.final_compounded(),
            final_contributions_only: trajectory.final_contributions_only(),
        }
    }
}

/// A client-facing summary of one advisory session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceReport {
    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// Total questionnaire score.
    pub score: RiskScore,

    /// Risk category derived from the score.
    pub category: RiskCategory,

    /// The (possibly user-adjusted) allocation.
    pub allocation: Allocation,

    /// Annualized portfolio statistics, when computed.
    pub stats: Option<PortfolioStats>,

    /// Growth projection endpoints, when computed.
    pub projection: Option<ProjectionSummary>,
}

impl AdviceReport {
    /// Create a report for a scored questionnaire and resolved allocation.
    pub fn new(score: RiskScore, category: RiskCategory, allocation: Allocation) -> Self {
        Self {
            generated_at: Utc::now(),
            score,
            category,
            allocation,
            stats: None,
            projection: None,
        }
    }

    /// Attach portfolio statistics.
    #[must_use]
    pub const fn with_stats(mut self, stats: PortfolioStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Attach a growth projection summary.
    #[must_use]
    pub const fn with_projection(mut self, projection: ProjectionSummary) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monterrey_growth::simulate;
    use monterrey_profile::AllocationModel;

    fn sample_report() -> AdviceReport {
        let category = RiskCategory::Medium;
        let allocation = AllocationModel::for_category(category).default_allocation();
        AdviceReport::new(RiskScore::from(150), category, allocation)
    }

    #[test]
    fn test_report_creation() {
        let report = sample_report();
        assert_eq!(report.category, RiskCategory::Medium);
        assert_eq!(u16::from(report.score), 150);
        assert!(report.stats.is_none());
        assert!(report.projection.is_none());
    }

    #[test]
    fn test_report_with_attachments() {
        let trajectory = simulate(8.0, 1000.0, 100.0, 5);
        let report = sample_report()
            .with_stats(PortfolioStats {
                expected_return_pct: 7.4,
                volatility_pct: 11.2,
            })
            .with_projection(ProjectionSummary::from_trajectory(&trajectory, 5));

        let projection = report.projection.unwrap();
        assert_eq!(projection.horizon_years, 5);
        assert_eq!(projection.final_compounded, trajectory.final_compounded());
        assert!(projection.final_compounded > projection.final_contributions_only);
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = sample_report().with_stats(PortfolioStats {
            expected_return_pct: 7.4,
            volatility_pct: 11.2,
        });

        let json = report.to_json().unwrap();
        assert!(json.contains("\"category\""));

        let parsed: AdviceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, report.category);
        assert_eq!(parsed.allocation, report.allocation);
        assert_eq!(parsed.stats, report.stats);
    }
}
