//! Redis-backed store.

use super::service::{KvStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Stores each key as a Redis string under the `kv:` namespace.
///
/// Uses `ConnectionManager` for automatic reconnects. Unlike a cache, errors
/// are propagated: a failed write is a failed write.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "kv:".to_string(),
        })
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

/// `KEYS` pattern matching every key that starts with `prefix` literally.
fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('*');
    pattern
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = conn.get::<_, Option<String>>(self.build_key(key)).await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(self.build_key(key), value).await?;
        debug!("Redis SET: {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn list(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.client.clone();
        let pattern = prefix_pattern(&self.build_key(prefix));
        let mut keys: Vec<String> = conn
            .keys::<_, Vec<String>>(pattern)
            .await?
            .into_iter()
            .filter_map(|k| k.strip_prefix(&self.key_prefix).map(str::to_string))
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_pattern_plain() {
        assert_eq!(prefix_pattern("kv:abc"), "kv:abc*");
        assert_eq!(prefix_pattern("kv:"), "kv:*");
    }

    #[test]
    fn test_prefix_pattern_escapes_glob_characters() {
        assert_eq!(prefix_pattern("kv:a*b"), r"kv:a\*b*");
        assert_eq!(prefix_pattern("kv:a?b"), r"kv:a\?b*");
        assert_eq!(prefix_pattern("kv:[ab]"), r"kv:\[ab\]*");
        assert_eq!(prefix_pattern(r"kv:a\b"), r"kv:a\\b*");
    }
}
