//! Month-by-month compound growth projection.
//!
//! The annual rate is converted to an effective monthly rate
//! `m = (1 + rate/100)^(1/12) - 1`, so compounding the monthly rate over 12
//! months reproduces the annual rate exactly. Each month the contribution is
//! added and the balance grows by `m`; a contributions-only baseline runs in
//! parallel for comparison. Negative rates are legal and model a declining
//! market.

use serde::{Deserialize, Serialize};

/// Contribution periods per year; the projection is always monthly.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Parallel wealth trajectories indexed by month.
///
/// Both sequences start at the initial amount and have
/// `horizon_years * 12 + 1` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthTrajectory {
    compounded: Vec<f64>,
    contributions_only: Vec<f64>,
}

impl GrowthTrajectory {
    /// Wealth with returns compounded monthly.
    pub fn compounded(&self) -> &[f64] {
        &self.compounded
    }

    /// Wealth from contributions alone, no returns.
    pub fn contributions_only(&self) -> &[f64] {
        &self.contributions_only
    }

    /// Final compounded value.
    pub fn final_compounded(&self) -> f64 {
        self.compounded[self.compounded.len() - 1]
    }

    /// Final contributions-only value.
    pub fn final_contributions_only(&self) -> f64 {
        self.contributions_only[self.contributions_only.len() - 1]
    }

    /// Number of entries (months plus the initial value).
    pub fn len(&self) -> usize {
        self.compounded.len()
    }

    /// Always false; a trajectory holds at least the initial value.
    pub fn is_empty(&self) -> bool {
        self.compounded.is_empty()
    }

    /// Iterate `(month, compounded, contributions_only)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.compounded
            .iter()
            .zip(&self.contributions_only)
            .enumerate()
            .map(|(month, (&compounded, &contributions_only))| {
                (month, compounded, contributions_only)
            })
    }
}

/// Effective monthly rate equivalent to an annual percentage rate.
pub fn effective_monthly_rate(annual_rate_pct: f64) -> f64 {
    (1.0 + annual_rate_pct / 100.0).powf(1.0 / f64::from(MONTHS_PER_YEAR)) - 1.0
}

/// Project compound growth under monthly contributions.
///
/// # Arguments
/// * `annual_rate_pct` - Annual return in percent; may be negative
/// * `initial` - Starting amount, shared by both trajectories
/// * `monthly_contribution` - Amount added at every monthly step
/// * `horizon_years` - Projection length in years (at least 1)
pub fn simulate(
    annual_rate_pct: f64,
    initial: f64,
    monthly_contribution: f64,
    horizon_years: u32,
) -> GrowthTrajectory {
    let monthly_rate = effective_monthly_rate(annual_rate_pct);
    let steps = (horizon_years * MONTHS_PER_YEAR) as usize;

    let mut compounded = Vec::with_capacity(steps + 1);
    let mut contributions_only = Vec::with_capacity(steps + 1);
    compounded.push(initial);
    contributions_only.push(initial);

    for month in 0..steps {
        let grown = (compounded[month] + monthly_contribution) * (1.0 + monthly_rate);
        compounded.push(grown);
        contributions_only.push(contributions_only[month] + monthly_contribution);
    }

    GrowthTrajectory {
        compounded,
        contributions_only,
    }
}
