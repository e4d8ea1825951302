//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
///
/// Shape and field constraints are checked here; shortcode format and
/// uniqueness are enforced by [`crate::application::services::LinkService`].
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Validity window in minutes. Falls back to the configured default.
    #[validate(range(min = 1, message = "Validity must be at least 1 minute"))]
    pub validity: Option<u32>,

    /// Optional caller-chosen shortcode.
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortLink")]
    pub short_link: String,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub expiry: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let req: ShortenRequest =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();

        assert!(req.validity.is_none());
        assert!(req.shortcode.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_zero_validity() {
        let req: ShortenRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "validity": 0 }))
                .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_rejects_relative_url() {
        let req: ShortenRequest = serde_json::from_value(json!({ "url": "/relative" })).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_rejects_negative_validity_at_parse() {
        let parsed = serde_json::from_value::<ShortenRequest>(
            json!({ "url": "https://example.com", "validity": -5 }),
        );

        assert!(parsed.is_err());
    }

    #[test]
    fn test_response_field_names() {
        let response = ShortenResponse {
            short_link: "http://localhost:8000/abc123".to_string(),
            expiry: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["shortLink"], "http://localhost:8000/abc123");
        assert_eq!(json["expiry"], "2026-10-19T12:00:00.000000Z");
    }
}
