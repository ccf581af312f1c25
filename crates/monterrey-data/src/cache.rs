//! Session-scoped caching of price retrievals.

use crate::error::Result;
use crate::provider::PriceProvider;
use crate::series::PriceSeries;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

type CacheKey = (String, DateTime<Utc>, DateTime<Utc>);

/// A price provider wrapper that remembers successful fetches for the
/// lifetime of the session.
///
/// Identical requests (same symbol and date range) hit the underlying
/// provider once. Only successful results are stored: a failed fetch is
/// surfaced to the caller and retried on the next request, so a cached
/// error can never stand in for data.
#[derive(Debug)]
pub struct CachedQuotes<P> {
    provider: P,
    cache: HashMap<CacheKey, PriceSeries>,
}

impl<P: PriceProvider> CachedQuotes<P> {
    /// Wrap a provider with an empty cache.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: HashMap::new(),
        }
    }

    /// Fetch closing prices, serving repeated identical requests from cache.
    pub async fn fetch_closes(
        &mut self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        let key = (symbol.to_string(), start, end);
        if let Some(series) = self.cache.get(&key) {
            return Ok(series.clone());
        }

        let series = self.provider.fetch_closes(symbol, start, end).await?;
        self.cache.insert(key, series.clone());
        Ok(series)
    }

    /// Number of distinct requests currently cached.
    pub fn cached_requests(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached results, forcing fresh fetches.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Access the wrapped provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::series::PricePoint;
    use chrono::NaiveDate;
    use std::cell::Cell;

    /// Provider that counts calls and optionally fails the first one.
    #[derive(Debug)]
    struct ScriptedProvider {
        calls: Cell<usize>,
        fail_first: bool,
    }

    impl ScriptedProvider {
        fn new(fail_first: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail_first,
            }
        }

        fn sample_series(symbol: &str) -> PriceSeries {
            let points = (0..5)
                .map(|i| {
                    PricePoint::new(
                        NaiveDate::from_ymd_opt(2024, 1, 2 + i).unwrap(),
                        100.0 + f64::from(i),
                    )
                })
                .collect();
            PriceSeries::new(symbol, points).unwrap()
        }
    }

    impl PriceProvider for ScriptedProvider {
        async fn fetch_closes(
            &self,
            symbol: &str,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> Result<PriceSeries> {
            let call = self.calls.get() + 1;
            self.calls.set(call);

            if self.fail_first && call == 1 {
                return Err(DataError::Network {
                    message: "connection reset".to_string(),
                });
            }
            Ok(Self::sample_series(symbol))
        }
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        (start, start + chrono::Duration::days(30))
    }

    #[tokio::test]
    async fn test_identical_requests_fetch_once() {
        let mut quotes = CachedQuotes::new(ScriptedProvider::new(false));
        let (start, end) = window();

        let first = quotes.fetch_closes("SPY", start, end).await.unwrap();
        let second = quotes.fetch_closes("SPY", start, end).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(quotes.provider().calls.get(), 1);
        assert_eq!(quotes.cached_requests(), 1);
    }

    #[tokio::test]
    async fn test_distinct_requests_fetch_separately() {
        let mut quotes = CachedQuotes::new(ScriptedProvider::new(false));
        let (start, end) = window();

        quotes.fetch_closes("SPY", start, end).await.unwrap();
        quotes.fetch_closes("QQQ", start, end).await.unwrap();
        quotes
            .fetch_closes("SPY", start, end + chrono::Duration::days(1))
            .await
            .unwrap();

        assert_eq!(quotes.provider().calls.get(), 3);
        assert_eq!(quotes.cached_requests(), 3);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mut quotes = CachedQuotes::new(ScriptedProvider::new(true));
        let (start, end) = window();

        let err = quotes.fetch_closes("SPY", start, end).await.unwrap_err();
        assert!(matches!(err, DataError::Network { .. }));
        assert_eq!(quotes.cached_requests(), 0);

        // The retry goes back to the provider and succeeds.
        let series = quotes.fetch_closes("SPY", start, end).await.unwrap();
        assert_eq!(series.symbol(), "SPY");
        assert_eq!(quotes.provider().calls.get(), 2);
    }

    #[tokio::test]
    async fn test_clear_forces_refetch() {
        let mut quotes = CachedQuotes::new(ScriptedProvider::new(false));
        let (start, end) = window();

        quotes.fetch_closes("SPY", start, end).await.unwrap();
        quotes.clear();
        quotes.fetch_closes("SPY", start, end).await.unwrap();

        assert_eq!(quotes.provider().calls.get(), 2);
    }
}
