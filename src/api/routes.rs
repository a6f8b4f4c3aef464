//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link from a form-encoded `url`
pub fn routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
