//! Repository trait for per-link click logs.

use crate::domain::entities::{Click, ClickLog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click logs.
///
/// # Consistency
///
/// `append` is a read-modify-write of the whole log without a lock. Two
/// overlapping appends for the same code may both read the same snapshot, in
/// which case one of the two clicks is lost.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvClickRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click to the log of `code`, evicting the oldest entries so
    /// that at most `capacity` remain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append(&self, code: &str, click: Click, capacity: usize) -> Result<(), AppError>;

    /// Returns the full log of `code`, oldest first. Empty if none recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or a corrupt log.
    async fn find_all(&self, code: &str) -> Result<ClickLog, AppError>;
}
