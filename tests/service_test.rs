// ABOUTME: Integration tests for the analysis service
// ABOUTME: Cache-aside behavior, stale fallback, invalidation, and batch analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use racegrade::cache::memory::InMemoryProfileCache;
use racegrade::cache::{CacheConfig, ProfileCache};
use racegrade::errors::{AppError, AppResult, ErrorCode};
use racegrade::intelligence::AnalysisConfig;
use racegrade::models::RawRaceRecord;
use racegrade::providers::{FetchedProfile, RawPersonalBest, ResultsProvider};
use racegrade::service::AnalysisService;

/// Scripted results source: serves a fixed profile, counts fetches, and can
/// be switched into failure mode mid-test
#[derive(Clone)]
struct StubProvider {
    profile: FetchedProfile,
    fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ResultsProvider for StubProvider {
    fn source_key(&self) -> &'static str {
        "stub"
    }

    async fn fetch_athlete(&self, _athlete_id: &str) -> AppResult<FetchedProfile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::provider_error("stub", "source offline"));
        }
        Ok(self.profile.clone())
    }
}

fn stub(profile: FetchedProfile) -> (StubProvider, Arc<AtomicBool>, Arc<AtomicUsize>) {
    let fail = Arc::new(AtomicBool::new(false));
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = StubProvider {
        profile,
        fail: Arc::clone(&fail),
        calls: Arc::clone(&calls),
    };
    (provider, fail, calls)
}

fn raw_record(date: &str, finish_time: &str) -> RawRaceRecord {
    RawRaceRecord {
        event_label: "Bushy Park parkrun".to_owned(),
        date: date.to_owned(),
        finish_time: finish_time.to_owned(),
        position: None,
        age_grade: Some("61.2 %".to_owned()),
        personal_best: false,
    }
}

fn fetched_profile(name: &str) -> FetchedProfile {
    FetchedProfile {
        name: name.to_owned(),
        club: Some("Riverside AC".to_owned()),
        age_group: Some("V45".to_owned()),
        gender: Some("Female".to_owned()),
        personal_bests: vec![
            RawPersonalBest {
                event_label: "5000".to_owned(),
                time: "21:10".to_owned(),
            },
            RawPersonalBest {
                event_label: "HM".to_owned(),
                time: "1:39:45".to_owned(),
            },
        ],
        results: vec![
            raw_record("14/06/2025", "22:30"),
            raw_record("07/06/2025", "23:01"),
            raw_record("31/05/2025", "22:48"),
        ],
    }
}

async fn service_over(
    provider: StubProvider,
    cooldown: Duration,
) -> AppResult<(
    AnalysisService<StubProvider, InMemoryProfileCache>,
    InMemoryProfileCache,
)> {
    let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;
    let handle = cache.clone();
    let service = AnalysisService::new(provider, cache, AnalysisConfig::default(), cooldown);
    Ok((service, handle))
}

#[tokio::test]
async fn test_first_request_fetches_normalizes_and_caches() -> AppResult<()> {
    let (provider, _fail, calls) = stub(fetched_profile("Jo Runner"));
    let (service, cache) = service_over(provider, Duration::hours(6)).await?;

    let report = service.athlete_report("123456").await?;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.entry_count().await?, 1);
    assert_eq!(report.athlete.name, "Jo Runner");
    assert_eq!(report.statistics.unwrap().total_runs, 3);
    assert!(report.overall.is_some());

    let names: Vec<&str> = report
        .distance_reports
        .iter()
        .map(|r| r.distance_name.as_str())
        .collect();
    assert_eq!(names, vec!["5K", "Half Marathon"]);
    Ok(())
}

#[tokio::test]
async fn test_fresh_cached_report_skips_the_source() -> AppResult<()> {
    let (provider, _fail, calls) = stub(fetched_profile("Jo Runner"));
    let (service, _cache) = service_over(provider, Duration::hours(6)).await?;

    let first = service.athlete_report("123456").await?;
    let second = service.athlete_report("123456").await?;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.generated_at, second.generated_at);
    Ok(())
}

#[tokio::test]
async fn test_zero_cooldown_always_refetches() -> AppResult<()> {
    let (provider, _fail, calls) = stub(fetched_profile("Jo Runner"));
    let (service, _cache) = service_over(provider, Duration::zero()).await?;

    service.athlete_report("123456").await?;
    service.athlete_report("123456").await?;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_stale_report_served_when_the_source_fails() -> AppResult<()> {
    let (provider, fail, calls) = stub(fetched_profile("Jo Runner"));
    let (service, _cache) = service_over(provider, Duration::zero()).await?;

    let first = service.athlete_report("123456").await?;

    fail.store(true, Ordering::SeqCst);
    let second = service.athlete_report("123456").await?;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(second.generated_at, first.generated_at);
    assert_eq!(second.athlete.name, "Jo Runner");
    Ok(())
}

#[tokio::test]
async fn test_fetch_failure_with_no_cached_report_propagates() -> AppResult<()> {
    let (provider, fail, calls) = stub(fetched_profile("Jo Runner"));
    fail.store(true, Ordering::SeqCst);
    let (service, cache) = service_over(provider, Duration::hours(6)).await?;

    let err = service.athlete_report("123456").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ProviderError);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.entry_count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_invalidate_forces_a_refetch() -> AppResult<()> {
    let (provider, _fail, calls) = stub(fetched_profile("Jo Runner"));
    let (service, _cache) = service_over(provider, Duration::hours(6)).await?;

    service.athlete_report("123456").await?;
    service.invalidate("123456").await?;
    service.athlete_report("123456").await?;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_gendered_benchmarks_flow_through_the_report() -> AppResult<()> {
    let (provider, _fail, _calls) = stub(fetched_profile("Jo Runner"));
    let (service, _cache) = service_over(provider, Duration::hours(6)).await?;

    let report = service.athlete_report("123456").await?;
    let five_k = &report.distance_reports[0];

    assert_eq!(five_k.comparisons.len(), 3);
    assert_eq!(five_k.comparisons[2].name, "Global Female 5K Average");
    Ok(())
}

#[tokio::test]
async fn test_analyze_batch_preserves_input_order() -> AppResult<()> {
    let (provider, _fail, _calls) = stub(fetched_profile("Jo Runner"));
    let (service, _cache) = service_over(provider, Duration::hours(6)).await?;

    let athletes = vec![
        fetched_profile("First Runner").normalize(),
        fetched_profile("Second Runner").normalize(),
    ];
    let reports = service.analyze_batch(athletes);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].athlete.name, "First Runner");
    assert_eq!(reports[1].athlete.name, "Second Runner");
    assert!(reports.iter().all(|r| r.statistics.is_some()));
    Ok(())
}
