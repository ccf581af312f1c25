//! Closing-price retrieval from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::provider::PriceProvider;
use crate::series::{PricePoint, PriceSeries};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

/// Yahoo Finance quote provider with rate limiting.
pub struct YahooQuoteProvider {
    provider: yahoo::YahooConnector,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooQuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooQuoteProvider")
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooQuoteProvider {
    /// Create a new Yahoo Finance quote provider with default rate limiting (1 req/sec).
    pub fn new() -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay: Duration::from_millis(1000),
        }
    }

    /// Create a new Yahoo Finance quote provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay,
        }
    }
}

impl Default for YahooQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceProvider for YahooQuoteProvider {
    /// Fetch daily closing prices for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "SPY")
    /// * `start` - Start date for the data (must be before `end`)
    /// * `end` - End date for the data
    ///
    /// # Returns
    /// A [`PriceSeries`] of daily closes. An empty result from the provider
    /// is reported as [`DataError::NotFound`].
    async fn fetch_closes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        if start >= end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let mut quotes = response.quotes().map_err(|e| DataError::Network {
            message: e.to_string(),
        })?;

        if quotes.is_empty() {
            return Err(DataError::NotFound {
                symbol: symbol.to_string(),
            });
        }

        quotes.sort_by_key(|q| q.timestamp);

        // One close per calendar day; intraday duplicates keep the last quote.
        let mut points: Vec<PricePoint> = Vec::with_capacity(quotes.len());
        for quote in &quotes {
            let secs = i64::try_from(quote.timestamp)
                .map_err(|e| DataError::TimeConversion(e.to_string()))?;
            let date = DateTime::<Utc>::from_timestamp(secs, 0)
                .ok_or_else(|| {
                    DataError::TimeConversion(format!("timestamp {} out of range", secs))
                })?
                .date_naive();

            match points.last_mut() {
                Some(last) if last.date == date => last.close = quote.close,
                _ => points.push(PricePoint::new(date, quote.close)),
            }
        }

        // Apply rate limiting
        sleep(self.rate_limit_delay).await;

        PriceSeries::new(symbol, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[tokio::test]
    #[ignore = "hits Yahoo Finance"]
    async fn test_fetch_closes() {
        let provider = YahooQuoteProvider::new();
        let end = Utc::now();
        let start = end - ChronoDuration::days(30);

        let series = provider.fetch_closes("SPY", start, end).await.unwrap();
        assert_eq!(series.symbol(), "SPY");
        assert!(series.len() > 1);
    }

    #[tokio::test]
    async fn test_invalid_date_range() {
        let provider = YahooQuoteProvider::new();
        let start = Utc::now();
        let end = start - ChronoDuration::days(30);

        let result = provider.fetch_closes("SPY", start, end).await;
        assert!(matches!(result, Err(DataError::InvalidDateRange { .. })));
    }

    #[tokio::test]
    async fn test_equal_start_and_end_rejected() {
        let provider = YahooQuoteProvider::new();
        let now = Utc::now();

        let result = provider.fetch_closes("SPY", now, now).await;
        assert!(matches!(result, Err(DataError::InvalidDateRange { .. })));
    }

    #[tokio::test]
    async fn test_invalid_symbol() {
        let provider = YahooQuoteProvider::new();
        let end = Utc::now();
        let start = end - ChronoDuration::days(30);

        let result = provider.fetch_closes("", start, end).await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
