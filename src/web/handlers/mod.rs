//! HTML template rendering handlers.

mod dashboard;
mod home;
mod stats;

pub use dashboard::dashboard_handler;
pub use home::home_handler;
pub use stats::stats_handler;
