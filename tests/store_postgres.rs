//! Requires a PostgreSQL server reachable through `DATABASE_URL`.
//!
//! ```bash
//! cargo test --test store_postgres -- --ignored
//! ```

use edge_shortener::infrastructure::store::{KvStore, PgStore};
use sqlx::PgPool;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_put_get_roundtrip(pool: PgPool) {
    let store = PgStore::new(pool);

    assert_eq!(store.get("abc123").await.unwrap(), None);

    store.put("abc123", "{\"url\":\"https://example.com\"}").await.unwrap();

    assert_eq!(
        store.get("abc123").await.unwrap().as_deref(),
        Some("{\"url\":\"https://example.com\"}")
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_put_overwrites(pool: PgPool) {
    let store = PgStore::new(pool);

    store.put("__index", "[\"a\"]").await.unwrap();
    store.put("__index", "[\"b\",\"a\"]").await.unwrap();

    assert_eq!(
        store.get("__index").await.unwrap().as_deref(),
        Some("[\"b\",\"a\"]")
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_by_prefix(pool: PgPool) {
    let store = PgStore::new(pool);

    store.put("abc123", "{}").await.unwrap();
    store.put("abc123:clicks", "[]").await.unwrap();
    store.put("zzz999", "{}").await.unwrap();

    assert_eq!(
        store.list("abc").await.unwrap(),
        vec!["abc123".to_string(), "abc123:clicks".to_string()]
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let store = PgStore::new(pool);
    assert!(store.health_check().await);
    assert_eq!(store.backend_name(), "postgres");
}
