//! Public origin derivation from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

const FORWARDED_HOST: &str = "x-forwarded-host";
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// First entry of a possibly comma-separated forwarded header.
fn forwarded<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Builds the `scheme://host[:port]` origin the client used to reach us.
///
/// The host comes from the `Host` header, or from the request URI authority
/// when there is none (HTTP/2 carries it in `:authority`). The scheme comes
/// from the URI when it has one, else `http`. When `behind_proxy` is true,
/// `X-Forwarded-Host` and `X-Forwarded-Proto` take precedence; only enable
/// that behind a trusted reverse proxy.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if neither a usable `Host` header nor a
/// URI authority is present.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
/// let uri = Uri::from_static("/shorten");
///
/// assert_eq!(request_origin(&headers, &uri, false).unwrap(), "http://sho.rt:8080");
/// ```
pub fn request_origin(
    headers: &HeaderMap,
    uri: &Uri,
    behind_proxy: bool,
) -> Result<String, AppError> {
    let host = match behind_proxy.then(|| forwarded(headers, FORWARDED_HOST)).flatten() {
        Some(host) => host,
        None => match headers.get(header::HOST) {
            Some(value) => value
                .to_str()
                .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?,
            None => uri
                .authority()
                .map(|authority| authority.as_str())
                .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
        },
    };

    let scheme = behind_proxy
        .then(|| forwarded(headers, FORWARDED_PROTO))
        .flatten()
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    Ok(format!("{}://{}", scheme, host))
}
