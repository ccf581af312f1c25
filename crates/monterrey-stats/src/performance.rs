//! Historical performance views: trailing returns and normalized indices.

use crate::align::AlignedCloses;
use crate::error::Result;
use chrono::NaiveDate;
use monterrey_data::{PricePoint, PriceSeries};
use monterrey_profile::Allocation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A trailing lookback window measured in trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingPeriod {
    /// Display label, e.g. "3M".
    pub label: &'static str,
    /// Window length in trading days.
    pub trading_days: usize,
}

/// Standard lookback windows for performance tables.
pub const DEFAULT_TRAILING_PERIODS: [TrailingPeriod; 4] = [
    TrailingPeriod {
        label: "1M",
        trading_days: 21,
    },
    TrailingPeriod {
        label: "3M",
        trading_days: 63,
    },
    TrailingPeriod {
        label: "6M",
        trading_days: 126,
    },
    TrailingPeriod {
        label: "1Y",
        trading_days: 252,
    },
];

/// Percentage return over one trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingReturn {
    /// Window label.
    pub label: &'static str,
    /// Return in percent, rounded to 2 decimals; `None` when the series is
    /// shorter than the window.
    pub return_pct: Option<f64>,
}

/// Percentage return of a series over each trailing window.
///
/// A window of `n` trading days compares the latest close against the close
/// `n` observations back; series with at most `n` observations yield `None`
/// for that window.
pub fn trailing_returns(series: &PriceSeries, periods: &[TrailingPeriod]) -> Vec<TrailingReturn> {
    let points = series.points();
    let n = points.len();

    periods
        .iter()
        .map(|period| {
            let return_pct = (n > period.trading_days).then(|| {
                let past = points[n - period.trading_days].close;
                round2((points[n - 1].close / past - 1.0) * 100.0)
            });
            TrailingReturn {
                label: period.label,
                return_pct,
            }
        })
        .collect()
}

/// Rescale a series so its first close equals `base`.
pub fn normalized_index(series: &PriceSeries, base: f64) -> Vec<PricePoint> {
    let first = series.first().close;
    series
        .points()
        .iter()
        .map(|p| PricePoint::new(p.date, p.close / first * base))
        .collect()
}

/// Weighted performance index of the whole portfolio.
///
/// Aligns the series on common dates, rescales each instrument to start at
/// 1, and sums them with the allocation fractions; the result starts at 1
/// and tracks the growth of one unit invested at the first aligned date.
pub fn portfolio_index(
    series: &HashMap<String, PriceSeries>,
    allocation: &Allocation,
) -> Result<Vec<(NaiveDate, f64)>> {
    let symbols: Vec<&str> = allocation.symbols().collect();
    let aligned = AlignedCloses::align(&symbols, series)?;

    let normalized = aligned.normalized();
    let weights = allocation.fractions();

    Ok(aligned
        .dates()
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            let value = weights
                .iter()
                .enumerate()
                .map(|(j, w)| w * normalized[[i, j]])
                .sum();
            (date, value)
        })
        .collect())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
