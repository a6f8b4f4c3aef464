//! Browser-facing pages.
//!
//! Server-side rendered with Askama templates from `templates/`; styling and
//! the submit script are served from `static/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - Formatting of service results for templates

pub mod handlers;
pub mod routes;
pub mod views;
