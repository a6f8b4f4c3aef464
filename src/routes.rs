//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Home page with the submit form
//! - `POST /shorten`       - Create a short link (form body)
//! - `GET  /dashboard`     - Listing of recent links
//! - `GET  /stats/{code}`  - Per-link statistics page
//! - `GET  /health`        - Health check: store, click queue
//! - `/static/*`           - Static assets
//! - `GET  /{code}`        - Short link redirect
//!
//! Fixed paths win over `/{code}`; the same segments are reserved by the
//! code generator so a short code can never shadow them.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router without path normalization.
///
/// Integration tests use this directly since `axum-test` wants a [`Router`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
