//! Store key naming.

/// Key of the newest-first list of all codes.
pub const INDEX_KEY: &str = "__index";

/// Suffix appended to a code to form its click log key.
pub const CLICKS_SUFFIX: &str = ":clicks";

pub fn link_key(code: &str) -> String {
    code.to_string()
}

pub fn clicks_key(code: &str) -> String {
    format!("{}{}", code, CLICKS_SUFFIX)
}
