//! Click event model for asynchronous click tracking.

use crate::domain::entities::Click;

/// A click waiting to be appended to a link's log.
///
/// Passed from the redirect handler to the background worker via a channel so
/// the redirect response never waits for the store write.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub click: Click,
}

impl ClickEvent {
    pub fn new(code: String, click: Click) -> Self {
        Self { code, click }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_event_creation() {
        let click = Click::at(Utc::now()).with_country("FR");
        let event = ClickEvent::new("abc123".to_string(), click.clone());

        assert_eq!(event.code, "abc123");
        assert_eq!(event.click, click);
    }
}
