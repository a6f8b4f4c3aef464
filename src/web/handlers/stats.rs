//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;
use crate::web::views::StatsView;

/// Template for the link statistics page.
///
/// Renders `templates/stats.html` with:
/// - Link details
/// - Total clicks and number of countries
/// - Country bar chart (top 10)
/// - The 20 most recent clicks
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub view: StatsView,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or unknown.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let stats = state.stats_service.get_link_stats(&code).await?;

    Ok(StatsTemplate {
        view: StatsView::new(stats, Utc::now()),
    })
}
