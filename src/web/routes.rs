//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, home_handler, stats_handler};
use axum::{Router, routing::get};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page with the submit form
/// - `GET /dashboard` - Most recent links with click counts
/// - `GET /stats/{code}` - Statistics for one link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/stats/{code}", get(stats_handler))
}
