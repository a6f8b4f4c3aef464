//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence.
//!
//! # Modules
//!
//! - [`store`] - Key-value store abstraction (in-memory, PostgreSQL, Redis)
//! - [`persistence`] - Repository implementations on top of a [`store::KvStore`]

pub mod persistence;
pub mod store;
