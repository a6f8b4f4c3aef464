//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Form body of `POST /shorten`.
///
/// `url` is optional so that a missing field reaches validation and yields
/// "URL is required" instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    /// Absolute URL that redirects to `original_url`.
    pub short_url: String,
    /// Absolute URL of the link's stats page.
    pub stats_url: String,
    pub original_url: String,
}
