//! Click log service.

use std::sync::Arc;

use crate::domain::entities::{Click, ClickLog};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service for recording and reading per-link click logs.
///
/// Each log keeps at most `capacity` clicks; older ones are evicted on append.
pub struct ClickService<C: ClickRepository> {
    repository: Arc<C>,
    capacity: usize,
}

impl<C: ClickRepository> ClickService<C> {
    pub fn new(repository: Arc<C>, capacity: usize) -> Self {
        Self {
            repository,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a click to the log of `code`.
    ///
    /// # Note
    ///
    /// Redirects do not call this directly; they queue a
    /// [`crate::domain::click_event::ClickEvent`] and
    /// [`crate::domain::click_worker::run_click_worker`] appends it here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn append(&self, code: &str, click: Click) -> Result<(), AppError> {
        self.repository.append(code, click, self.capacity).await
    }

    /// Returns every retained click for `code`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_all(&self, code: &str) -> Result<ClickLog, AppError> {
        self.repository.find_all(code).await
    }

    /// Number of retained clicks for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_for(&self, code: &str) -> Result<usize, AppError> {
        Ok(self.get_all(code).await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use crate::infrastructure::persistence::KvClickRepository;
    use crate::infrastructure::store::MemoryStore;
    use chrono::{DateTime, Duration, Utc};

    fn click_at(offset_secs: i64) -> Click {
        Click::at(DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(offset_secs))
    }

    fn memory_service(capacity: usize) -> ClickService<KvClickRepository> {
        let repo = KvClickRepository::new(Arc::new(MemoryStore::new()));
        ClickService::new(Arc::new(repo), capacity)
    }

    #[tokio::test]
    async fn test_append_passes_capacity() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_append()
            .withf(|code, _, capacity| code == "abc123" && *capacity == 1000)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = ClickService::new(Arc::new(mock_repo), ClickLog::DEFAULT_CAPACITY);
        service.append("abc123", click_at(0)).await.unwrap();
    }

    #[tokio::test]
    async fn test_count_matches_log_length() {
        let service = memory_service(1000);

        assert_eq!(service.count_for("abc123").await.unwrap(), 0);

        for i in 0..3 {
            service.append("abc123", click_at(i)).await.unwrap();
        }

        assert_eq!(service.count_for("abc123").await.unwrap(), 3);
        assert_eq!(service.get_all("abc123").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_log_is_capped_at_one_thousand() {
        let service = memory_service(ClickLog::DEFAULT_CAPACITY);

        for i in 0..1001 {
            service.append("abc123", click_at(i)).await.unwrap();
        }

        let log = service.get_all("abc123").await.unwrap();
        assert_eq!(log.len(), 1000);
        assert!(!log.iter().any(|c| *c == click_at(0)));
        assert_eq!(log.last(), Some(&click_at(1000)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_appends_lose_at_most_one() {
        let service = Arc::new(memory_service(1000));

        let a = tokio::spawn({
            let service = service.clone();
            async move { service.append("race01", click_at(1)).await }
        });
        let b = tokio::spawn({
            let service = service.clone();
            async move { service.append("race01", click_at(2)).await }
        });
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let count = service.count_for("race01").await.unwrap();
        assert!((1..=2).contains(&count), "unexpected log length {count}");
    }
}
