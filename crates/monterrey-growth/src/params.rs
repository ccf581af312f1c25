//! Validated simulation inputs.

use crate::simulate::{GrowthTrajectory, simulate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest supported projection horizon, in years.
pub const HORIZON_MIN_YEARS: u32 = 1;

/// Longest supported projection horizon, in years.
pub const HORIZON_MAX_YEARS: u32 = 30;

/// Errors for out-of-domain simulation inputs.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Initial amount below zero
    #[error("Initial amount must be at least 0, got {initial}")]
    NegativeInitial {
        /// The rejected amount
        initial: f64,
    },

    /// Monthly contribution below zero
    #[error("Monthly contribution must be at least 0, got {contribution}")]
    NegativeContribution {
        /// The rejected amount
        contribution: f64,
    },

    /// Horizon outside the supported range
    #[error("Horizon must be between 1 and 30 years, got {horizon_years}")]
    HorizonOutOfRange {
        /// The rejected horizon
        horizon_years: u32,
    },
}

/// User-supplied projection inputs, validated before simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Starting amount.
    pub initial: f64,
    /// Amount added every month.
    pub monthly_contribution: f64,
    /// Projection length in years (1-30).
    pub horizon_years: u32,
}

impl SimulationParams {
    /// Check the domain bounds on every field.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.initial < 0.0 || self.initial.is_nan() {
            return Err(ParamError::NegativeInitial {
                initial: self.initial,
            });
        }
        if self.monthly_contribution < 0.0 || self.monthly_contribution.is_nan() {
            return Err(ParamError::NegativeContribution {
                contribution: self.monthly_contribution,
            });
        }
        if !(HORIZON_MIN_YEARS..=HORIZON_MAX_YEARS).contains(&self.horizon_years) {
            return Err(ParamError::HorizonOutOfRange {
                horizon_years: self.horizon_years,
            });
        }
        Ok(())
    }

    /// Validate, then project growth at the given annual rate.
    pub fn run(&self, annual_rate_pct: f64) -> Result<GrowthTrajectory, ParamError> {
        self.validate()?;
        Ok(simulate(
            annual_rate_pct,
            self.initial,
            self.monthly_contribution,
            self.horizon_years,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const fn params(initial: f64, contribution: f64, horizon: u32) -> SimulationParams {
        SimulationParams {
            initial,
            monthly_contribution: contribution,
            horizon_years: horizon,
        }
    }

    #[test]
    fn test_valid_params_run() {
        let trajectory = params(1000.0, 100.0, 5).run(8.0).unwrap();
        assert_eq!(trajectory.len(), 61);
    }

    #[rstest]
    #[case(params(-1.0, 100.0, 5))]
    #[case(params(f64::NAN, 100.0, 5))]
    fn test_bad_initial_rejected(#[case] p: SimulationParams) {
        assert!(matches!(
            p.validate(),
            Err(ParamError::NegativeInitial { .. })
        ));
    }

    #[test]
    fn test_negative_contribution_rejected() {
        assert!(matches!(
            params(1000.0, -5.0, 5).validate(),
            Err(ParamError::NegativeContribution { .. })
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(31)]
    fn test_horizon_bounds(#[case] horizon: u32) {
        assert!(matches!(
            params(1000.0, 100.0, horizon).validate(),
            Err(ParamError::HorizonOutOfRange { horizon_years }) if horizon_years == horizon
        ));
    }

    #[rstest]
    #[case(1)]
    #[case(30)]
    fn test_horizon_edges_accepted(#[case] horizon: u32) {
        assert!(params(0.0, 0.0, horizon).validate().is_ok());
    }
}
