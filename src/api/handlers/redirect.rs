//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};
use url::Url;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::{is_reserved, is_valid_code};
use crate::utils::request_meta::click_from_headers;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject reserved path segments and anything not shaped like a code
/// 2. Look up the link
/// 3. Queue a click with the request's geo/network metadata
/// 4. Return 302 Found
///
/// # Click Tracking
///
/// Clicks go to a bounded channel drained by the click worker. If the queue
/// is full or closed, the click is dropped and the redirect still succeeds.
///
/// # Errors
///
/// Returns 404 Not Found if the code is reserved, malformed, or unknown. No
/// click is recorded in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if is_reserved(&code) || !is_valid_code(&code) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let link = state.link_service.get_link_by_code(&code).await?;
    let location = location_header(&link.url)?;

    let click = click_from_headers(&headers, Utc::now());
    match state.click_sender.try_send(ClickEvent::new(code, click)) {
        Ok(()) => debug!("Click queued for {}", link.code),
        Err(TrySendError::Full(event)) => {
            warn!("Click queue full, dropping click for {}", event.code)
        }
        Err(TrySendError::Closed(event)) => {
            warn!("Click queue closed, dropping click for {}", event.code)
        }
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Stored URLs are kept as submitted. When the raw text is not a valid header
/// value (embedded control characters), fall back to the parsed form, which
/// strips them.
fn location_header(url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(url) {
        return Ok(value);
    }

    Url::parse(url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| AppError::internal("Stored URL is not redirectable", json!({ "url": url })))
}
