//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the home page: submit form and result panel.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Submission happens client-side via `static/shorten.js`, which posts to
/// `/shorten` and fills in the result.
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
