use async_trait::async_trait;
use curriculum_etl::core::DocumentProvider;
use curriculum_etl::{CurriculumCache, CurriculumError, CurriculumExtractor, CurriculumQuery, ExtractionError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

const DOCUMENT: &str = "Dag 1 – Greetings\n1. おはよう – ohayou – Good morning\n";

/// Fails its first `failures` fetches, then serves `DOCUMENT`.
struct FlakyProvider {
    calls: AtomicUsize,
    failures: usize,
    delay: Duration,
}

impl FlakyProvider {
    fn new(failures: usize, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failures,
            delay,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentProvider for FlakyProvider {
    fn location(&self) -> String {
        "flaky://japwords".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, ExtractionError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if call < self.failures {
            return Err(ExtractionError::SourceUnavailable {
                location: self.location(),
            });
        }
        Ok(DOCUMENT.as_bytes().to_vec())
    }
}

fn cache_with(provider: Arc<FlakyProvider>) -> Arc<CurriculumCache> {
    Arc::new(CurriculumCache::new(provider, CurriculumExtractor::default()))
}

#[tokio::test]
async fn test_repeated_calls_reuse_first_success() {
    let provider = FlakyProvider::new(0, Duration::ZERO);
    let cache = cache_with(provider.clone());

    let first = cache.get_curriculum().await.unwrap();
    let second = cache.get_curriculum().await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(provider.calls(), 1);
    assert_eq!(cache.extraction_count(), 1);
}

#[tokio::test]
async fn test_failure_is_not_cached() {
    let provider = FlakyProvider::new(1, Duration::ZERO);
    let cache = cache_with(provider.clone());

    let err = cache.get_curriculum().await.unwrap_err();
    assert!(matches!(err, ExtractionError::SourceUnavailable { .. }));
    assert!(!cache.is_ready());

    let curriculum = cache.get_curriculum().await.unwrap();
    assert_eq!(curriculum.day_count(), 1);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_calls_share_one_extraction() {
    let provider = FlakyProvider::new(0, Duration::from_millis(100));
    let cache = cache_with(provider.clone());

    let mut tasks = JoinSet::new();
    for _ in 0..16 {
        let cache = Arc::clone(&cache);
        tasks.spawn(async move { cache.get_curriculum().await });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.unwrap().unwrap());
    }

    assert_eq!(results.len(), 16);
    assert!(results.iter().all(|c| Arc::ptr_eq(c, &results[0])));
    assert_eq!(provider.calls(), 1);
    assert_eq!(cache.extraction_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_waiters_share_one_failure() {
    let provider = FlakyProvider::new(1, Duration::from_millis(100));
    let cache = cache_with(provider.clone());

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let cache = Arc::clone(&cache);
        tasks.spawn(async move { cache.get_curriculum().await });
    }

    while let Some(joined) = tasks.join_next().await {
        let err = joined.unwrap().unwrap_err();
        assert!(matches!(err, ExtractionError::SourceUnavailable { .. }));
    }
    assert_eq!(provider.calls(), 1);

    // the next caller retries from scratch
    assert!(cache.get_curriculum().await.is_ok());
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_query_surfaces_extraction_failure() {
    let provider = FlakyProvider::new(1, Duration::ZERO);
    let query = CurriculumQuery::new(cache_with(provider));

    let err = query.list_days().await.unwrap_err();
    assert!(matches!(err, CurriculumError::ExtractionFailed(ExtractionError::SourceUnavailable { .. })));
    assert!(err.is_retryable());

    let days = query.list_days().await.unwrap();
    assert_eq!(days.len(), 1);
}
