//! Link creation and retrieval service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use crate::utils::url_validator::validate_url;

/// Service for creating and retrieving shortened links.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Maximum code draws before giving up on a free code.
    pub const MAX_CODE_ATTEMPTS: usize = 10;

    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `long_url`.
    ///
    /// # Writes
    ///
    /// The record is saved first, then the code is prepended to the index.
    /// The two writes are independent: if the second fails the link still
    /// resolves but does not appear on the dashboard, and the error is
    /// returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not a
    /// well-formed absolute URL. Nothing is written in that case.
    ///
    /// Returns [`AppError::Internal`] on storage errors or when no free code
    /// was found in [`Self::MAX_CODE_ATTEMPTS`] draws.
    pub async fn create_short_link(&self, long_url: &str) -> Result<Link, AppError> {
        let url = validate_url(long_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({})))?;

        let code = self.generate_unique_code().await?;
        let link = Link::new(code, url, Utc::now());

        self.link_repository.save(&link).await?;
        self.link_repository.prepend_to_index(&link.code).await?;

        info!("Created short link {} -> {}", link.code, link.url);
        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Returns up to `limit` codes, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_codes(&self, limit: usize) -> Result<Vec<String>, AppError> {
        self.link_repository.list_index(limit).await
    }

    /// Absolute short URL for `code` under `origin` (e.g. `https://sho.rt`).
    pub fn get_short_url(&self, origin: &str, code: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), code)
    }

    /// Absolute stats page URL for `code` under `origin`.
    pub fn get_stats_url(&self, origin: &str, code: &str) -> String {
        format!("{}/stats/{}", origin.trim_end_matches('/'), code)
    }

    /// Draws codes until one is neither reserved nor taken.
    ///
    /// The check and the later write are not atomic; two concurrent creations
    /// can still pick the same code.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=Self::MAX_CODE_ATTEMPTS {
            let code = generate_code();

            if is_reserved(&code) {
                continue;
            }

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            warn!("Code collision on attempt {}: {}", attempt, code);
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
