//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and aggregation, and
//! give HTTP handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup
//! - [`services::click_service::ClickService`] - Bounded click logs
//! - [`services::stats_service::StatsService`] - Per-link stats and dashboard

pub mod services;
