//! Date alignment of per-instrument price series.
//!
//! Portfolio statistics need every instrument observed on the same dates.
//! Alignment is an inner join: only dates present in every series survive.
//! Columns are keyed by symbol and ordered by the caller, so the weight
//! vector and the return matrix can never drift apart positionally.

use crate::error::{Result, StatsError};
use chrono::NaiveDate;
use monterrey_data::PriceSeries;
use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};

/// Closing prices for several instruments on their common dates.
#[derive(Debug, Clone)]
pub struct AlignedCloses {
    symbols: Vec<String>,
    dates: Vec<NaiveDate>,
    closes: Array2<f64>,
}

impl AlignedCloses {
    /// Inner-join the given series on their common dates.
    ///
    /// Column order follows `symbols`; every symbol must have a series.
    /// Fails with [`StatsError::InsufficientData`] when fewer than 2 dates
    /// are shared by all instruments.
    pub fn align(symbols: &[&str], series: &HashMap<String, PriceSeries>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(StatsError::EmptyAllocation);
        }

        let mut resolved = Vec::with_capacity(symbols.len());
        for &symbol in symbols {
            let found = series
                .get(symbol)
                .ok_or_else(|| StatsError::MissingSeries {
                    symbol: symbol.to_string(),
                })?;
            resolved.push(found);
        }

        let mut common: BTreeSet<NaiveDate> = resolved[0].dates().collect();
        for found in &resolved[1..] {
            let dates: BTreeSet<NaiveDate> = found.dates().collect();
            common = common.intersection(&dates).copied().collect();
        }

        if common.len() < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: common.len(),
            });
        }

        let dates: Vec<NaiveDate> = common.into_iter().collect();
        let mut closes = Array2::<f64>::zeros((dates.len(), resolved.len()));
        for (j, found) in resolved.iter().enumerate() {
            for (i, date) in dates.iter().enumerate() {
                closes[[i, j]] = found
                    .close_on(*date)
                    .expect("aligned date present in every series");
            }
        }

        Ok(Self {
            symbols: symbols.iter().map(|s| (*s).to_string()).collect(),
            dates,
            closes,
        })
    }

    /// Symbols in column order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Aligned dates in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Closing prices, rows = dates, columns = symbols.
    pub const fn closes(&self) -> &Array2<f64> {
        &self.closes
    }

    /// Number of aligned observations.
    pub fn n_observations(&self) -> usize {
        self.dates.len()
    }

    /// Number of instruments.
    pub fn n_instruments(&self) -> usize {
        self.symbols.len()
    }

    /// Daily simple returns, `r[t] = p[t] / p[t-1] - 1`.
    ///
    /// One row fewer than the aligned observations.
    pub fn daily_returns(&self) -> Array2<f64> {
        let (rows, cols) = self.closes.dim();
        Array2::from_shape_fn((rows - 1, cols), |(i, j)| {
            self.closes[[i + 1, j]] / self.closes[[i, j]] - 1.0
        })
    }

    /// Prices rescaled so every instrument starts at 1.
    pub fn normalized(&self) -> Array2<f64> {
        let (rows, cols) = self.closes.dim();
        Array2::from_shape_fn((rows, cols), |(i, j)| {
            self.closes[[i, j]] / self.closes[[0, j]]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monterrey_data::PricePoint;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn series(symbol: &str, observations: &[(u32, f64)]) -> PriceSeries {
        let points = observations
            .iter()
            .map(|&(d, close)| PricePoint::new(date(d), close))
            .collect();
        PriceSeries::new(symbol, points).unwrap()
    }

    fn by_symbol(all: Vec<PriceSeries>) -> HashMap<String, PriceSeries> {
        all.into_iter().map(|s| (s.symbol().to_string(), s)).collect()
    }

    #[test]
    fn test_inner_join_keeps_common_dates_only() {
        let map = by_symbol(vec![
            series("SPY", &[(2, 100.0), (3, 101.0), (4, 102.0), (5, 103.0)]),
            series("QQQ", &[(3, 50.0), (4, 51.0), (5, 52.0), (8, 53.0)]),
        ]);

        let aligned = AlignedCloses::align(&["SPY", "QQQ"], &map).unwrap();
        assert_eq!(aligned.dates(), &[date(3), date(4), date(5)]);
        assert_eq!(aligned.symbols(), &["SPY", "QQQ"]);
        assert_eq!(aligned.closes()[[0, 0]], 101.0);
        assert_eq!(aligned.closes()[[0, 1]], 50.0);
        assert_eq!(aligned.n_observations(), 3);
        assert_eq!(aligned.n_instruments(), 2);
    }

    #[test]
    fn test_column_order_follows_caller() {
        let map = by_symbol(vec![
            series("SPY", &[(2, 100.0), (3, 101.0)]),
            series("QQQ", &[(2, 50.0), (3, 51.0)]),
        ]);

        let aligned = AlignedCloses::align(&["QQQ", "SPY"], &map).unwrap();
        assert_eq!(aligned.symbols(), &["QQQ", "SPY"]);
        assert_eq!(aligned.closes()[[0, 0]], 50.0);
        assert_eq!(aligned.closes()[[0, 1]], 100.0);
    }

    #[test]
    fn test_too_few_common_dates_rejected() {
        let map = by_symbol(vec![
            series("SPY", &[(2, 100.0), (3, 101.0)]),
            series("QQQ", &[(3, 50.0), (4, 51.0)]),
        ]);

        let err = AlignedCloses::align(&["SPY", "QQQ"], &map).unwrap_err();
        assert!(matches!(
            err,
            StatsError::InsufficientData {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_disjoint_series_rejected() {
        let map = by_symbol(vec![
            series("SPY", &[(2, 100.0), (3, 101.0)]),
            series("QQQ", &[(8, 50.0), (9, 51.0)]),
        ]);

        let err = AlignedCloses::align(&["SPY", "QQQ"], &map).unwrap_err();
        assert!(matches!(
            err,
            StatsError::InsufficientData {
                required: 2,
                actual: 0
            }
        ));
    }

    #[test]
    fn test_missing_series_rejected() {
        let map = by_symbol(vec![series("SPY", &[(2, 100.0), (3, 101.0)])]);

        let err = AlignedCloses::align(&["SPY", "QQQ"], &map).unwrap_err();
        assert!(matches!(err, StatsError::MissingSeries { symbol } if symbol == "QQQ"));
    }

    #[test]
    fn test_empty_symbol_list_rejected() {
        let err = AlignedCloses::align(&[], &HashMap::new()).unwrap_err();
        assert!(matches!(err, StatsError::EmptyAllocation));
    }

    #[test]
    fn test_daily_returns() {
        let map = by_symbol(vec![series("SPY", &[(2, 100.0), (3, 110.0), (4, 99.0)])]);
        let aligned = AlignedCloses::align(&["SPY"], &map).unwrap();

        let returns = aligned.daily_returns();
        assert_eq!(returns.dim(), (2, 1));
        assert!((returns[[0, 0]] - 0.1).abs() < 1e-12);
        assert!((returns[[1, 0]] - (99.0 / 110.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_starts_at_one() {
        let map = by_symbol(vec![
            series("SPY", &[(2, 100.0), (3, 110.0)]),
            series("QQQ", &[(2, 50.0), (3, 51.0)]),
        ]);
        let aligned = AlignedCloses::align(&["SPY", "QQQ"], &map).unwrap();

        let normalized = aligned.normalized();
        assert_eq!(normalized[[0, 0]], 1.0);
        assert_eq!(normalized[[0, 1]], 1.0);
        assert!((normalized[[1, 0]] - 1.1).abs() < 1e-12);
    }
}
