//! Annualized portfolio return and volatility from historical closes.
//!
//! Daily moments are scaled to yearly figures with the fixed 252-trading-day
//! convention:
//!
//! - expected return (%) = 100 · wᵀ(mean(r) · 252)
//! - volatility (%) = 100 · sqrt(wᵀ(cov(r) · 252)w)
//!
//! where r are daily simple returns and w the allocation fractions. Series
//! and weights are matched by symbol; positional pairing only happens inside
//! the final matrix product, after the columns were ordered by the
//! allocation itself.

use crate::align::AlignedCloses;
use crate::error::Result;
use monterrey_data::PriceSeries;
use monterrey_profile::Allocation;
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized portfolio statistics, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    /// Annualized expected return, percent.
    pub expected_return_pct: f64,
    /// Annualized volatility, percent.
    pub volatility_pct: f64,
}

/// Compute annualized expected return and volatility for a weighted
/// portfolio from per-instrument price history.
///
/// Series are looked up by symbol in the allocation's instrument order and
/// aligned on common dates before the daily-return moments are taken.
pub fn compute_stats(
    series: &HashMap<String, PriceSeries>,
    allocation: &Allocation,
) -> Result<PortfolioStats> {
    let symbols: Vec<&str> = allocation.symbols().collect();
    let aligned = AlignedCloses::align(&symbols, series)?;

    let returns = aligned.daily_returns();
    let mean_annual = mean_daily_returns(&returns) * TRADING_DAYS_PER_YEAR;
    let cov_annual = sample_covariance(&returns) * TRADING_DAYS_PER_YEAR;

    let weights = Array1::from(allocation.fractions());
    let expected_return_pct = weights.dot(&mean_annual) * 100.0;
    let volatility_pct = weights.dot(&cov_annual.dot(&weights)).max(0.0).sqrt() * 100.0;

    Ok(PortfolioStats {
        expected_return_pct,
        volatility_pct,
    })
}

/// Per-instrument mean of daily returns.
fn mean_daily_returns(returns: &Array2<f64>) -> Array1<f64> {
    let n_obs = returns.nrows();
    returns.sum_axis(Axis(0)) / n_obs as f64
}

/// Sample covariance matrix of daily returns (denominator n - 1).
///
/// A single observation has no dispersion and yields the zero matrix.
fn sample_covariance(returns: &Array2<f64>) -> Array2<f64> {
    let (n_obs, n_instruments) = returns.dim();
    let means = mean_daily_returns(returns);
    let denom = n_obs.saturating_sub(1).max(1) as f64;

    let mut cov = Array2::<f64>::zeros((n_instruments, n_instruments));
    for i in 0..n_instruments {
        for j in 0..n_instruments {
            let mut acc = 0.0;
            for t in 0..n_obs {
                acc += (returns[[t, i]] - means[i]) * (returns[[t, j]] - means[j]);
            }
            cov[[i, j]] = acc / denom;
        }
    }

    cov
}
