//! Click entity and the bounded per-link click log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A recorded visit to a short link.
///
/// Every metadata field is optional: geo data comes from headers set by the
/// fronting proxy and may be absent. Serialized with camelCase keys; the
/// network organization is stored as `asOrganization`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default, rename = "asOrganization")]
    pub network_org: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub referer: Option<String>,
}

impl Click {
    /// A click at `timestamp` with no metadata.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            country: None,
            city: None,
            region: None,
            timezone: None,
            latitude: None,
            longitude: None,
            network_org: None,
            user_agent: None,
            referer: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Chronological click history of one link, capped in length.
///
/// Appending to a full log evicts the oldest entry first, so the log always
/// holds the most recent `capacity` clicks. Serializes as a plain JSON array,
/// oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClickLog {
    events: VecDeque<Click>,
}

impl ClickLog {
    /// Maximum number of clicks retained per link.
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `click`, evicting from the front while the log is at `capacity`.
    ///
    /// A capacity of zero is treated as one.
    pub fn push_capped(&mut self, click: Click, capacity: usize) {
        let capacity = capacity.max(1);
        while self.events.len() >= capacity {
            self.events.pop_front();
        }
        self.events.push_back(click);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Click> + ExactSizeIterator {
        self.events.iter()
    }

    pub fn first(&self) -> Option<&Click> {
        self.events.front()
    }

    pub fn last(&self) -> Option<&Click> {
        self.events.back()
    }
}

impl From<Vec<Click>> for ClickLog {
    fn from(events: Vec<Click>) -> Self {
        Self {
            events: events.into(),
        }
    }
}
