//! Key-value storage backends.
//!
//! Provides a [`KvStore`] trait with three implementations:
//! - [`MemoryStore`] - Process-local map for development and tests
//! - [`PgStore`] - PostgreSQL table of key/value rows
//! - [`RedisStore`] - Redis strings under a namespace prefix
//!
//! Values are opaque strings; repositories store JSON documents in them.

mod memory_store;
mod pg_store;
mod redis_store;
mod service;

pub use memory_store::MemoryStore;
pub use pg_store::PgStore;
pub use redis_store::RedisStore;
pub use service::{KvStore, StoreError, StoreResult};

#[cfg(test)]
pub use service::MockKvStore;

use crate::config::{Config, StoreBackend};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Opens the backend selected by `STORE_BACKEND`.
///
/// # Errors
///
/// Returns an error if the backend's connection settings are missing or the
/// connection cannot be established.
pub async fn connect(config: &Config) -> Result<Arc<dyn KvStore>> {
    let store: Arc<dyn KvStore> = match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store: data is lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres store")?;
            let store = PgStore::connect(
                url,
                config.db_max_connections,
                config.db_connect_timeout,
            )
            .await
            .context("Failed to open PostgreSQL store")?;
            Arc::new(store)
        }
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set for the redis store")?;
            let store = RedisStore::connect(url)
                .await
                .context("Failed to open Redis store")?;
            Arc::new(store)
        }
    };

    Ok(store)
}
