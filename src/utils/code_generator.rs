//! Shortcode generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated shortcodes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Maximum length of any shortcode, generated or requested.
pub const MAX_CODE_LENGTH: usize = 20;

/// Codes that collide with static route segments and could never redirect.
pub const RESERVED_CODES: &[&str] = &["shorturls"];

/// Character set accepted in requested shortcodes.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Generates a random shortcode of [`GENERATED_CODE_LENGTH`] characters.
///
/// Each character is drawn uniformly from `[A-Za-z0-9]`. Uniqueness is not
/// checked here; a colliding code is rejected at insertion time with
/// [`AppError::Conflict`] and is not retried.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-requested shortcode.
///
/// # Rules
///
/// - Length: 1-20 characters
/// - Allowed characters: ASCII letters and digits
/// - Not one of [`RESERVED_CODES`]
///
/// # Errors
///
/// Returns [`AppError::InvalidFormat`] if any rule is violated.
pub fn validate_shortcode(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::invalid_format(
            "Invalid shortcode format",
            json!({
                "shortcode": code,
                "reason": format!("must be 1-{MAX_CODE_LENGTH} characters"),
            }),
        ));
    }

    if !SHORTCODE_REGEX.is_match(code) {
        return Err(AppError::invalid_format(
            "Invalid shortcode format",
            json!({
                "shortcode": code,
                "reason": "must contain only letters and digits",
            }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::invalid_format(
            "Invalid shortcode format",
            json!({
                "shortcode": code,
                "reason": "is reserved",
            }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        assert_eq!(generate_code().len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generated_codes_pass_validation() {
        assert!(validate_shortcode(&generate_code()).is_ok());
    }

    #[test]
    fn test_generate_code_mostly_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        // 62^6 possibilities; a collision among 1000 draws is vanishingly rare.
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_validate_accepts_mixed_case_and_digits() {
        assert!(validate_shortcode("AbC123").is_ok());
        assert!(validate_shortcode("x").is_ok());
        assert!(validate_shortcode("12345678901234567890").is_ok());
    }

    #[test]
    fn test_validate_too_long() {
        let result = validate_shortcode("123456789012345678901");
        assert!(matches!(result, Err(AppError::InvalidFormat { .. })));
    }

    #[test]
    fn test_validate_rejects_punctuation() {
        for code in ["my-link", "my_link", "a b", "a/b", "emoji\u{1F600}", "café"] {
            let result = validate_shortcode(code);
            assert!(
                matches!(result, Err(AppError::InvalidFormat { .. })),
                "'{code}' should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_reserved_route_segment() {
        let result = validate_shortcode("shorturls");
        assert!(matches!(result, Err(AppError::InvalidFormat { .. })));

        assert!(validate_shortcode("ShortUrls").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_shortcode("").is_err());
    }
}
