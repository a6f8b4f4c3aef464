//! Repository trait for link records and the link index.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links.
///
/// The record and the index live under separate keys and are written by
/// separate calls. A record without an index entry is a valid state (the link
/// resolves but is not listed); so is an index entry without a record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a link record keyed by its code, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, link: &Link) -> Result<(), AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or a corrupt record.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Puts `code` at the head of the link index.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn prepend_to_index(&self, code: &str) -> Result<(), AppError>;

    /// Returns up to `limit` codes from the index, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or a corrupt index.
    async fn list_index(&self, limit: usize) -> Result<Vec<String>, AppError>;
}
