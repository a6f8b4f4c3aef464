//! Handler for link shortening endpoint.

use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, Uri},
};

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /shorten` with `application/x-www-form-urlencoded` body `url=...`
///
/// # Response
///
/// ```json
/// {
///   "code": "aB3x_9",
///   "shortUrl": "https://sho.rt/aB3x_9",
///   "statsUrl": "https://sho.rt/stats/aB3x_9",
///   "originalUrl": "https://example.com/some/long/path"
/// }
/// ```
///
/// Absolute URLs use the origin the client reached us on.
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "URL is required"}` or
/// `{"error": "Invalid URL"}`. Returns 500 on storage errors.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    let origin = request_origin(&headers, &uri, state.behind_proxy)?;

    let link = state
        .link_service
        .create_short_link(form.url.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.get_short_url(&origin, &link.code),
        stats_url: state.link_service.get_stats_url(&origin, &link.code),
        code: link.code,
        original_url: link.url,
    }))
}
