//! Repository implementations over a key-value store.
//!
//! # Key Layout
//!
//! | Key             | Value                                   |
//! |-----------------|-----------------------------------------|
//! | `<code>`        | `{"url": ..., "createdAt": ...}`        |
//! | `<code>:clicks` | JSON array of clicks, oldest first      |
//! | `__index`       | JSON array of codes, newest first       |
//!
//! # Repositories
//!
//! - [`KvLinkRepository`] - Link records and the link index
//! - [`KvClickRepository`] - Bounded click logs

pub mod keys;
pub mod kv_click_repository;
pub mod kv_link_repository;

pub use kv_click_repository::KvClickRepository;
pub use kv_link_repository::KvLinkRepository;
