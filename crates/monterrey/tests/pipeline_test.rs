//! Integration tests for the advisory pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use monterrey::data::{DataError, PricePoint, PriceProvider, PriceSeries};
use monterrey::growth::SimulationParams;
use monterrey::profile::{ProfileError, QuestionnaireResponse, RiskCategory, sections};
use monterrey::{AdvisorSession, SessionError};
use std::cell::Cell;
use std::collections::HashMap;

/// Deterministic provider: every symbol compounds 0.5% per day for 30 days.
#[derive(Debug, Default)]
struct ScriptedProvider {
    calls: Cell<usize>,
    fail_symbol: Option<&'static str>,
}

impl PriceProvider for ScriptedProvider {
    async fn fetch_closes(
        &self,
        symbol: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<PriceSeries, DataError> {
        self.calls.set(self.calls.get() + 1);

        if self.fail_symbol == Some(symbol) {
            return Err(DataError::Network {
                message: "connection reset".to_string(),
            });
        }

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points = (0..30u32)
            .map(|i| {
                PricePoint::new(
                    start + chrono::Days::new(u64::from(i)),
                    100.0 * 1.005_f64.powi(i as i32),
                )
            })
            .collect();
        PriceSeries::new(symbol, points)
    }
}

fn answer_all(value: u8) -> QuestionnaireResponse {
    let mut response = QuestionnaireResponse::new();
    for section in sections() {
        for question in section.questions {
            response.record(section.id, question, value).unwrap();
        }
    }
    response
}

fn window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc();
    (start, start + chrono::Duration::days(60))
}

#[tokio::test]
async fn test_full_pipeline() {
    let mut session = AdvisorSession::new(ScriptedProvider::default());
    let (start, end) = window();

    let category = session.submit_questionnaire(&answer_all(1)).unwrap();
    assert_eq!(category, RiskCategory::High);
    assert_eq!(session.score().map(u16::from), Some(67));

    let allocation = session.resolve_allocation(None).unwrap();
    assert_eq!(allocation.symbols().collect::<Vec<_>>(), ["QQQ", "SPY", "EEM"]);

    let stats = session.compute_statistics(start, end).await.unwrap();
    // Every instrument compounds at exactly 0.5% daily: no dispersion.
    assert!(stats.volatility_pct.abs() < 1e-6);
    assert!((stats.expected_return_pct - 0.005 * 252.0 * 100.0).abs() < 1e-6);

    let params = SimulationParams {
        initial: 1000.0,
        monthly_contribution: 100.0,
        horizon_years: 5,
    };
    let trajectory = session.project_growth(params).unwrap();
    assert_eq!(trajectory.len(), 61);
    assert!(trajectory.final_compounded() > trajectory.final_contributions_only());
}

#[tokio::test]
async fn test_stages_require_predecessors() {
    let mut session = AdvisorSession::new(ScriptedProvider::default());
    let (start, end) = window();

    assert!(matches!(
        session.resolve_allocation(None),
        Err(SessionError::StageNotReady { .. })
    ));
    assert!(matches!(
        session.compute_statistics(start, end).await,
        Err(SessionError::StageNotReady { .. })
    ));
    assert!(matches!(
        session.project_growth(SimulationParams {
            initial: 0.0,
            monthly_contribution: 0.0,
            horizon_years: 1,
        }),
        Err(SessionError::StageNotReady { .. })
    ));
}

#[tokio::test]
async fn test_resubmission_drops_downstream_results() {
    let mut session = AdvisorSession::new(ScriptedProvider::default());
    let (start, end) = window();

    session.submit_questionnaire(&answer_all(4)).unwrap();
    assert_eq!(session.category(), Some(RiskCategory::Conservative));

    session.resolve_allocation(None).unwrap();
    session.compute_statistics(start, end).await.unwrap();

    let category = session.submit_questionnaire(&answer_all(3)).unwrap();
    assert_eq!(category, RiskCategory::Medium);
    assert!(session.allocation().is_none());
    assert!(session.stats().is_none());
    assert!(session.trajectory().is_none());
}

#[tokio::test]
async fn test_repeated_statistics_hit_the_cache() {
    let mut session = AdvisorSession::new(ScriptedProvider::default());
    let (start, end) = window();

    session.submit_questionnaire(&answer_all(2)).unwrap();
    session.resolve_allocation(None).unwrap();

    session.compute_statistics(start, end).await.unwrap();
    session.compute_statistics(start, end).await.unwrap();

    // Three instruments, fetched once each.
    assert_eq!(session.quotes().provider().calls.get(), 3);
    assert_eq!(session.quotes().cached_requests(), 3);
}

#[tokio::test]
async fn test_weight_overrides() {
    let mut session = AdvisorSession::new(ScriptedProvider::default());

    session.submit_questionnaire(&answer_all(1)).unwrap();

    let valid = HashMap::from([
        ("QQQ".to_string(), 60),
        ("SPY".to_string(), 40),
        ("EEM".to_string(), 0),
    ]);
    let allocation = session.resolve_allocation(Some(&valid)).unwrap();
    assert_eq!(allocation.weight("QQQ"), Some(60));

    let invalid = HashMap::from([
        ("QQQ".to_string(), 60),
        ("SPY".to_string(), 40),
        ("EEM".to_string(), 1),
    ]);
    let err = session.resolve_allocation(Some(&invalid)).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Profile(ProfileError::AllocationSum { sum: 101 })
    ));
}

#[tokio::test]
async fn test_fetch_failure_leaves_prior_stages_intact() {
    let provider = ScriptedProvider {
        calls: Cell::new(0),
        fail_symbol: Some("EEM"),
    };
    let mut session = AdvisorSession::new(provider);
    let (start, end) = window();

    session.submit_questionnaire(&answer_all(1)).unwrap();
    session.resolve_allocation(None).unwrap();

    let err = session.compute_statistics(start, end).await.unwrap_err();
    assert!(matches!(err, SessionError::Data(DataError::Network { .. })));

    // The failed stage leaves its predecessors untouched.
    assert_eq!(session.category(), Some(RiskCategory::High));
    assert!(session.allocation().is_some());
    assert!(session.stats().is_none());
}
