//! View models for the HTML pages.
//!
//! Templates receive pre-formatted strings only; everything that depends on
//! the clock takes an explicit `now`.

use chrono::{DateTime, Utc};

use crate::application::services::{Dashboard, DashboardEntry, LinkStats};
use crate::domain::analytics::{CountryCount, UNKNOWN_COUNTRY, country_flag, relative_time};
use crate::domain::entities::Click;

/// Original URL width on the dashboard.
pub const DASHBOARD_URL_CHARS: usize = 40;
/// Original URL width on the stats page.
pub const STATS_URL_CHARS: usize = 50;
/// Network organization width in the recent clicks table.
pub const NETWORK_CHARS: usize = 20;

const ELLIPSIS: &str = "...";
const NO_VALUE: &str = "\u{2014}";

/// Cuts `text` to `max` characters, appending `...` when anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}{}", &text[..idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Absolute timestamp, e.g. `Mar 5, 2025, 14:07` (UTC).
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %H:%M").to_string()
}

/// `"<flag> city, region, country"`, skipping absent parts.
pub fn location_label(click: &Click) -> String {
    let mut label = country_flag(click.country.as_deref());

    if let Some(city) = click.city.as_deref() {
        label.push_str(&format!(" {},", city));
    }
    if let Some(region) = click.region.as_deref() {
        label.push_str(&format!(" {},", region));
    }

    label.push(' ');
    label.push_str(click.country.as_deref().unwrap_or(UNKNOWN_COUNTRY));
    label
}

/// One bar of the country chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub flag: String,
    pub country: String,
    pub count: usize,
    /// One decimal, e.g. `66.7`.
    pub percentage: String,
    /// Bar width relative to the top country, `0..=100`.
    pub bar_width: String,
}

impl CountryRow {
    fn new(stat: &CountryCount, max_count: usize) -> Self {
        let width = stat.count as f64 / max_count.max(1) as f64 * 100.0;

        Self {
            flag: country_flag(Some(&stat.country)),
            country: stat.country.clone(),
            count: stat.count,
            percentage: format!("{:.1}", stat.percentage),
            bar_width: format!("{:.1}", width),
        }
    }
}

/// One row of the recent clicks table.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickRow {
    pub age: String,
    pub timestamp: String,
    pub location: String,
    pub network: String,
    pub network_title: String,
}

impl ClickRow {
    fn new(click: &Click, now: DateTime<Utc>) -> Self {
        let (network, network_title) = match click.network_org.as_deref() {
            Some(org) => (truncate(org, NETWORK_CHARS), org.to_string()),
            None => (NO_VALUE.to_string(), String::new()),
        };

        Self {
            age: relative_time(click.timestamp, now),
            timestamp: format_timestamp(click.timestamp),
            location: location_label(click),
            network,
            network_title,
        }
    }
}

/// Everything `stats.html` renders.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub code: String,
    pub url: String,
    pub url_display: String,
    pub created: String,
    pub total_clicks: usize,
    pub country_count: usize,
    pub countries: Vec<CountryRow>,
    pub recent: Vec<ClickRow>,
}

impl StatsView {
    pub fn new(stats: LinkStats, now: DateTime<Utc>) -> Self {
        let max_count = stats.countries.first().map(|c| c.count).unwrap_or(1);

        Self {
            url_display: truncate(&stats.link.url, STATS_URL_CHARS),
            created: format_timestamp(stats.link.created_at),
            total_clicks: stats.total_clicks,
            country_count: stats.countries.len(),
            countries: stats
                .countries
                .iter()
                .map(|c| CountryRow::new(c, max_count))
                .collect(),
            recent: stats.recent.iter().map(|c| ClickRow::new(c, now)).collect(),
            code: stats.link.code,
            url: stats.link.url,
        }
    }
}

/// One row of the dashboard table.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRow {
    pub code: String,
    pub url: String,
    pub url_display: String,
    pub clicks: usize,
    pub age: String,
    pub created: String,
}

impl LinkRow {
    fn new(entry: &DashboardEntry, now: DateTime<Utc>) -> Self {
        Self {
            code: entry.link.code.clone(),
            url: entry.link.url.clone(),
            url_display: truncate(&entry.link.url, DASHBOARD_URL_CHARS),
            clicks: entry.clicks,
            age: relative_time(entry.link.created_at, now),
            created: format_timestamp(entry.link.created_at),
        }
    }
}

/// Everything `dashboard.html` renders.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub total_links: usize,
    pub total_clicks: usize,
    pub links: Vec<LinkRow>,
}

impl DashboardView {
    pub fn new(dashboard: &Dashboard, now: DateTime<Utc>) -> Self {
        Self {
            total_links: dashboard.total_links,
            total_clicks: dashboard.total_clicks,
            links: dashboard
                .entries
                .iter()
                .map(|e| LinkRow::new(e, now))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::GLOBE;
    use crate::domain::entities::Link;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 40), "short");
        assert_eq!(truncate("abcdef", 6), "abcdef");
        assert_eq!(truncate("abcdefg", 6), "abcdef...");
        assert_eq!(truncate("ääääää", 3), "äää...");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(at(2025, 3, 5, 14, 7)), "Mar 5, 2025, 14:07");
        assert_eq!(format_timestamp(at(2024, 12, 25, 0, 0)), "Dec 25, 2024, 00:00");
    }

    #[test]
    fn test_location_label() {
        let full = Click {
            country: Some("NL".to_string()),
            city: Some("Amsterdam".to_string()),
            region: Some("North Holland".to_string()),
            ..Click::at(Utc::now())
        };
        assert_eq!(
            location_label(&full),
            "\u{1F1F3}\u{1F1F1} Amsterdam, North Holland, NL"
        );

        let empty = Click::at(Utc::now());
        assert_eq!(location_label(&empty), format!("{} Unknown", GLOBE));
    }

    #[test]
    fn test_stats_view_bar_widths() {
        let now = at(2025, 3, 5, 12, 0);
        let stats = LinkStats {
            link: Link::new("abc123".into(), "https://example.com".into(), now),
            total_clicks: 3,
            countries: vec![
                CountryCount {
                    country: "US".into(),
                    count: 2,
                    percentage: 200.0 / 3.0,
                },
                CountryCount {
                    country: UNKNOWN_COUNTRY.into(),
                    count: 1,
                    percentage: 100.0 / 3.0,
                },
            ],
            recent: vec![Click::at(now - Duration::seconds(90))],
        };

        let view = StatsView::new(stats, now);

        assert_eq!(view.country_count, 2);
        assert_eq!(view.countries[0].bar_width, "100.0");
        assert_eq!(view.countries[0].percentage, "66.7");
        assert_eq!(view.countries[1].bar_width, "50.0");
        assert_eq!(view.countries[1].flag, GLOBE);
        assert_eq!(view.recent[0].age, "1m ago");
        assert_eq!(view.recent[0].network, "\u{2014}");
    }

    #[test]
    fn test_network_is_truncated_with_full_title() {
        let click = Click {
            network_org: Some("Deutsche Telekom AG Backbone".to_string()),
            ..Click::at(Utc::now())
        };
        let row = ClickRow::new(&click, Utc::now());

        assert_eq!(row.network, "Deutsche Telekom AG ...");
        assert_eq!(row.network_title, "Deutsche Telekom AG Backbone");
    }

    #[test]
    fn test_dashboard_row_truncates_url() {
        let now = Utc::now();
        let long = format!("https://example.com/{}", "x".repeat(60));
        let dashboard = Dashboard {
            entries: vec![DashboardEntry {
                link: Link::new("abc123".into(), long.clone(), now - Duration::hours(2)),
                clicks: 4,
            }],
            total_links: 1,
            total_clicks: 4,
        };

        let view = DashboardView::new(&dashboard, now);

        assert_eq!(view.links[0].url, long);
        assert_eq!(view.links[0].url_display.chars().count(), 43);
        assert_eq!(view.links[0].age, "2h ago");
    }
}
