//! One client's advisory workflow as an explicit pipeline object.
//!
//! The session owns everything the stages accumulate: the questionnaire
//! score, the resolved allocation, portfolio statistics and the growth
//! projection. Stages run strictly forward; a stage refuses to run until
//! its predecessor has produced a result, and re-running an earlier stage
//! drops every downstream result so stale values can never leak into a
//! later computation.

use chrono::{DateTime, Utc};
use monterrey_data::{CachedQuotes, DataError, PriceProvider, PriceSeries};
use monterrey_growth::{GrowthTrajectory, ParamError, SimulationParams};
use monterrey_profile::{
    Allocation, AllocationModel, ProfileError, QuestionnaireResponse, RiskCategory, RiskScore,
};
use monterrey_stats::{PortfolioStats, StatsError, compute_stats};
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by the session pipeline.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A stage ran before its predecessor produced a result
    #[error("Cannot compute {stage} before {requires}")]
    StageNotReady {
        /// The stage that was requested
        stage: &'static str,
        /// What must exist first
        requires: &'static str,
    },

    /// Questionnaire or allocation failure
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Price retrieval failure
    #[error(transparent)]
    Data(#[from] DataError),

    /// Statistics failure
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Simulation input failure
    #[error(transparent)]
    Params(#[from] ParamError),
}

/// Pipeline state for one advisory session.
///
/// Generic over the price provider so tests can substitute a scripted
/// source for Yahoo Finance.
#[derive(Debug)]
pub struct AdvisorSession<P> {
    quotes: CachedQuotes<P>,
    score: Option<RiskScore>,
    category: Option<RiskCategory>,
    allocation: Option<Allocation>,
    stats: Option<PortfolioStats>,
    trajectory: Option<GrowthTrajectory>,
}

impl<P: PriceProvider> AdvisorSession<P> {
    /// Start an empty session over a price provider.
    pub fn new(provider: P) -> Self {
        Self {
            quotes: CachedQuotes::new(provider),
            score: None,
            category: None,
            allocation: None,
            stats: None,
            trajectory: None,
        }
    }

    /// Score a completed questionnaire and classify the client.
    ///
    /// Replaces any previous score and drops allocation, statistics and
    /// projection from earlier submissions.
    pub fn submit_questionnaire(
        &mut self,
        response: &QuestionnaireResponse,
    ) -> Result<RiskCategory, SessionError> {
        let score = response.score()?;
        let category = RiskCategory::from_score(score);

        self.score = Some(score);
        self.category = Some(category);
        self.allocation = None;
        self.stats = None;
        self.trajectory = None;

        Ok(category)
    }

    /// The model portfolio recommended for the classified client.
    pub fn recommended_model(&self) -> Result<&'static AllocationModel, SessionError> {
        let category = self.category.ok_or(SessionError::StageNotReady {
            stage: "a recommendation",
            requires: "a scored questionnaire",
        })?;
        Ok(AllocationModel::for_category(category))
    }

    /// Resolve the allocation, applying user weight overrides when given.
    ///
    /// Drops statistics and projection from any earlier resolution.
    pub fn resolve_allocation(
        &mut self,
        overrides: Option<&HashMap<String, u8>>,
    ) -> Result<&Allocation, SessionError> {
        let model = self.recommended_model()?;
        let allocation = match overrides {
            Some(weights) => Allocation::from_overrides(model, weights)?,
            None => model.default_allocation(),
        };

        self.stats = None;
        self.trajectory = None;
        Ok(self.allocation.insert(allocation))
    }

    /// Fetch price history for every allocated instrument and compute
    /// annualized portfolio statistics over the given window.
    ///
    /// Identical fetches are served from the session cache; a retrieval
    /// failure aborts the stage and leaves earlier results intact.
    pub async fn compute_statistics(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PortfolioStats, SessionError> {
        let Some(allocation) = self.allocation.clone() else {
            return Err(SessionError::StageNotReady {
                stage: "portfolio statistics",
                requires: "a resolved allocation",
            });
        };

        let mut series: HashMap<String, PriceSeries> = HashMap::new();
        for symbol in allocation.symbols() {
            let fetched = self.quotes.fetch_closes(symbol, start, end).await?;
            series.insert(symbol.to_string(), fetched);
        }

        let stats = compute_stats(&series, &allocation)?;
        self.trajectory = None;
        self.stats = Some(stats);

        Ok(stats)
    }

    /// Project compound growth at the portfolio's expected return.
    pub fn project_growth(
        &mut self,
        params: SimulationParams,
    ) -> Result<&GrowthTrajectory, SessionError> {
        let Some(stats) = self.stats else {
            return Err(SessionError::StageNotReady {
                stage: "a growth projection",
                requires: "portfolio statistics",
            });
        };

        let trajectory = params.run(stats.expected_return_pct)?;
        Ok(self.trajectory.insert(trajectory))
    }

    /// The questionnaire score, once submitted.
    pub const fn score(&self) -> Option<RiskScore> {
        self.score
    }

    /// The risk category, once classified.
    pub const fn category(&self) -> Option<RiskCategory> {
        self.category
    }

    /// The resolved allocation, if any.
    pub const fn allocation(&self) -> Option<&Allocation> {
        self.allocation.as_ref()
    }

    /// The computed statistics, if any.
    pub const fn stats(&self) -> Option<PortfolioStats> {
        self.stats
    }

    /// The growth projection, if any.
    pub const fn trajectory(&self) -> Option<&GrowthTrajectory> {
        self.trajectory.as_ref()
    }

    /// The session's cached quote source.
    pub const fn quotes(&self) -> &CachedQuotes<P> {
        &self.quotes
    }
}
