//! Read-side aggregation over click logs.
//!
//! Everything here is a pure function of a click snapshot and, where time is
//! involved, an explicit `now`. Nothing is stored; summaries are recomputed on
//! every stats request.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Click, ClickLog};

/// Label used for clicks without a country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Number of countries kept by [`by_country`].
pub const TOP_COUNTRIES: usize = 10;

/// Default number of clicks returned by [`recent`].
pub const RECENT_CLICKS: usize = 20;

/// Offset from an ASCII uppercase letter to its regional indicator symbol.
pub const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Glyph shown when the country is unknown.
pub const GLOBE: &str = "\u{1F30D}";

/// Click count for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
    /// Share of all clicks, `0.0..=100.0`.
    pub percentage: f64,
}

/// Groups clicks by country, most clicked first, top [`TOP_COUNTRIES`] only.
///
/// Missing or empty countries count as [`UNKNOWN_COUNTRY`]. Countries with the
/// same count keep the order in which they first appear in the log.
pub fn by_country<'a, I>(clicks: I) -> Vec<CountryCount>
where
    I: IntoIterator<Item = &'a Click>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for click in clicks {
        total += 1;
        let country = click
            .country
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNKNOWN_COUNTRY);

        match positions.get(country) {
            Some(&idx) => order[idx].1 += 1,
            None => {
                positions.insert(country.to_string(), order.len());
                order.push((country.to_string(), 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(TOP_COUNTRIES);

    order
        .into_iter()
        .map(|(country, count)| CountryCount {
            country,
            count,
            percentage: if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Returns the `n` most recently appended clicks, newest first.
pub fn recent(log: &ClickLog, n: usize) -> Vec<Click> {
    log.iter().rev().take(n).cloned().collect()
}

/// Formats the age of `timestamp` relative to `now`.
///
/// Buckets use floor division on whole seconds: under a minute is
/// `"just now"`, then minutes, hours, and days. Timestamps in the future
/// count as `"just now"`.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

/// Maps a two-letter country code to its flag emoji.
///
/// Each letter is uppercased and shifted into the regional indicator range.
/// Any pair of letters yields a glyph pair, whether or not it names a real
/// country. `None`, the empty string, and [`UNKNOWN_COUNTRY`] map to [`GLOBE`].
pub fn country_flag(country: Option<&str>) -> String {
    match country {
        None | Some("") | Some(UNKNOWN_COUNTRY) => GLOBE.to_string(),
        Some(code) => code
            .chars()
            .flat_map(char::to_uppercase)
            .filter_map(|c| char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect(),
    }
}
