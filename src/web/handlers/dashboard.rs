//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::Utc;

use crate::application::services::StatsService;
use crate::error::AppError;
use crate::infrastructure::persistence::{KvClickRepository, KvLinkRepository};
use crate::state::AppState;
use crate::web::views::DashboardView;

/// Template for the dashboard page.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub view: DashboardView,
}

/// Renders the most recent links with their click counts.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let limit = StatsService::<KvLinkRepository, KvClickRepository>::DASHBOARD_LIMIT;
    let dashboard = state.stats_service.get_dashboard(limit).await?;

    Ok(DashboardTemplate {
        view: DashboardView::new(&dashboard, Utc::now()),
    })
}
