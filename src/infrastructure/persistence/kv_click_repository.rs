//! Key-value implementation of click repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::keys::clicks_key;
use crate::domain::entities::{Click, ClickLog};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use crate::infrastructure::store::KvStore;

/// Click repository keeping each link's log as one JSON array.
///
/// Appends read the whole array, push, and write it back without any lock.
pub struct KvClickRepository {
    store: Arc<dyn KvStore>,
}

impl KvClickRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClickRepository for KvClickRepository {
    async fn append(&self, code: &str, click: Click, capacity: usize) -> Result<(), AppError> {
        let key = clicks_key(code);
        let mut log = match self.store.get(&key).await? {
            Some(raw) => serde_json::from_str::<ClickLog>(&raw)?,
            None => ClickLog::new(),
        };

        log.push_capped(click, capacity);

        let raw = serde_json::to_string(&log)?;
        self.store.put(&key, &raw).await?;
        Ok(())
    }

    async fn find_all(&self, code: &str) -> Result<ClickLog, AppError> {
        match self.store.get(&clicks_key(code)).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(ClickLog::new()),
        }
    }
}
