//! Click metadata extraction from HTTP request headers.
//!
//! Geolocation is not computed here. The fronting edge proxy (Cloudflare's
//! visitor location headers, or an equivalent) annotates each request and we
//! copy what is present.

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};

use crate::domain::entities::Click;

pub const COUNTRY_HEADER: &str = "cf-ipcountry";
pub const CITY_HEADER: &str = "cf-ipcity";
pub const REGION_HEADER: &str = "cf-region";
pub const TIMEZONE_HEADER: &str = "cf-timezone";
pub const LATITUDE_HEADER: &str = "cf-iplatitude";
pub const LONGITUDE_HEADER: &str = "cf-iplongitude";
pub const NETWORK_ORG_HEADER: &str = "x-as-organization";

/// Country placeholder the proxy sends when it has no data.
const UNKNOWN_COUNTRY_PLACEHOLDER: &str = "XX";

fn header_value(headers: &HeaderMap, name: impl header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Builds a [`Click`] at `timestamp` from whatever metadata the request carries.
///
/// Missing, empty, or non-UTF-8 headers leave the field `None`.
pub fn click_from_headers(headers: &HeaderMap, timestamp: DateTime<Utc>) -> Click {
    Click {
        timestamp,
        country: header_value(headers, COUNTRY_HEADER)
            .filter(|c| !c.eq_ignore_ascii_case(UNKNOWN_COUNTRY_PLACEHOLDER)),
        city: header_value(headers, CITY_HEADER),
        region: header_value(headers, REGION_HEADER),
        timezone: header_value(headers, TIMEZONE_HEADER),
        latitude: header_value(headers, LATITUDE_HEADER),
        longitude: header_value(headers, LONGITUDE_HEADER),
        network_org: header_value(headers, NETWORK_ORG_HEADER),
        user_agent: header_value(headers, header::USER_AGENT),
        referer: header_value(headers, header::REFERER),
    }
}
