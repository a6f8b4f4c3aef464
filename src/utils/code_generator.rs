//! Short code generation.
//!
//! Codes are random draws from a URL-safe alphabet. Nothing here checks the
//! store; uniqueness is handled by the caller.

use rand::Rng;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// URL-safe alphabet: `A-Z`, `a-z`, `0-9`, `_`, `-`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Path segments that are routes, never codes.
pub const RESERVED_CODES: &[&str] = &["stats", "shorten", "dashboard", "health", "static"];

/// Generates a random [`CODE_LENGTH`]-character code from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `segment` is routed elsewhere and cannot be a code.
pub fn is_reserved(segment: &str) -> bool {
    RESERVED_CODES.contains(&segment)
}

/// Returns true if `segment` has the shape of a generated code.
///
/// Store keys that are not link records (`__index`, `<code>:clicks`) never
/// pass, so lookups can skip them.
pub fn is_valid_code(segment: &str) -> bool {
    segment.len() == CODE_LENGTH && segment.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        assert_eq!(generate_code().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_generate_code_mostly_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        // 64^6 space; a collision in 1000 draws is vanishingly unlikely
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_alphabet_size() {
        assert_eq!(ALPHABET.len(), 64);
    }

    #[test]
    fn test_reserved_segments() {
        assert!(is_reserved("stats"));
        assert!(is_reserved("shorten"));
        assert!(is_reserved("dashboard"));
        assert!(!is_reserved("abc123"));
        assert!(!is_reserved("Stats"));
    }

    #[test]
    fn test_valid_code_shape() {
        assert!(is_valid_code("aB3x_9"));
        assert!(is_valid_code("-_-_-_"));
        assert!(is_valid_code(&generate_code()));

        assert!(!is_valid_code("abc12"));
        assert!(!is_valid_code("abc1234"));
        assert!(!is_valid_code("__index"));
        assert!(!is_valid_code("ab:c12"));
        assert!(!is_valid_code("aB3x_9:clicks"));
        assert!(!is_valid_code("ääää"));
        assert!(!is_valid_code(""));
    }
}
