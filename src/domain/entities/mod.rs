//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code mapped to its original URL
//! - [`Click`] - One recorded visit with best-effort request metadata
//! - [`ClickLog`] - Bounded, insertion-ordered history of clicks for a link

pub mod click;
pub mod link;

pub use click::{Click, ClickLog};
pub use link::Link;
