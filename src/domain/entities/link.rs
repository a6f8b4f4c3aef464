//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL.
///
/// Immutable once created; there is no update or delete path.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(code: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            url,
            created_at,
        }
    }
}
