//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`analytics`] - Pure aggregation over click logs
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler receives redirect request
//! 2. [`click_event::ClickEvent`] is sent to async channel
//! 3. [`click_worker::run_click_worker`] appends it to the link's click log
//! 4. The log is persisted via [`repositories::ClickRepository`]

pub mod analytics;
pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
