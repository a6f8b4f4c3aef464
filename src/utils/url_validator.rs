//! Validation of submitted URLs.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL")]
    Malformed,
}

/// Checks that `raw` is a well-formed absolute URL and returns it trimmed.
///
/// The URL is otherwise kept exactly as submitted: no normalization, no
/// scheme restriction.
///
/// # Errors
///
/// - [`UrlValidationError::Missing`] for an empty or blank input
/// - [`UrlValidationError::Malformed`] if it does not parse as an absolute URL
pub fn validate_url(raw: &str) -> Result<String, UrlValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    Url::parse(trimmed).map_err(|_| UrlValidationError::Malformed)?;

    Ok(trimmed.to_string())
}
