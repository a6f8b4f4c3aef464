//! Key-value store trait and error types.

use async_trait::async_trait;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        Self::Backend(e.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal key-value contract the service is built on.
///
/// Offers single-key reads and writes plus key listing. There are no
/// transactions and no compare-and-swap: callers that write several keys must
/// tolerate partial failure between the writes.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryStore`]
/// - [`crate::infrastructure::store::PgStore`]
/// - [`crate::infrastructure::store::RedisStore`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Lists keys starting with `prefix`, sorted ascending.
    async fn list(&self, prefix: &str) -> StoreResult<Vec<String>>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
