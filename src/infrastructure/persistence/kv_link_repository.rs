//! Key-value implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::keys::{INDEX_KEY, link_key};
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::store::KvStore;

/// Stored form of a link; the code is the key, not part of the value.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkDocument {
    url: String,
    created_at: DateTime<Utc>,
}

/// Link repository storing one JSON document per code plus a JSON index.
pub struct KvLinkRepository {
    store: Arc<dyn KvStore>,
}

impl KvLinkRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    async fn load_index(&self) -> Result<Vec<String>, AppError> {
        match self.store.get(INDEX_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl LinkRepository for KvLinkRepository {
    async fn save(&self, link: &Link) -> Result<(), AppError> {
        let document = LinkDocument {
            url: link.url.clone(),
            created_at: link.created_at,
        };
        let raw = serde_json::to_string(&document)?;

        self.store.put(&link_key(&link.code), &raw).await?;
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let Some(raw) = self.store.get(&link_key(code)).await? else {
            return Ok(None);
        };
        let document: LinkDocument = serde_json::from_str(&raw)?;

        Ok(Some(Link::new(
            code.to_string(),
            document.url,
            document.created_at,
        )))
    }

    async fn prepend_to_index(&self, code: &str) -> Result<(), AppError> {
        let mut index = self.load_index().await?;
        if index.iter().any(|c| c == code) {
            debug!("Code {} already indexed", code);
            return Ok(());
        }
        index.insert(0, code.to_string());

        let raw = serde_json::to_string(&index)?;
        self.store.put(INDEX_KEY, &raw).await?;
        Ok(())
    }

    async fn list_index(&self, limit: usize) -> Result<Vec<String>, AppError> {
        let mut index = self.load_index().await?;
        index.truncate(limit);
        Ok(index)
    }
}
