//! Link registry: creation and redirect resolution.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_shortcode};
use crate::utils::url_normalizer::normalize_url;

/// Result of a successful link creation.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub short_link: String,
}

/// Service for creating and resolving short links.
///
/// Owns the shortcode lifecycle: format validation, generation, uniqueness
/// (delegated to the repository's atomic insert) and expiry enforcement.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of every short link, e.g.
    /// `http://localhost:8000`.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link valid for `validity_minutes` from now.
    ///
    /// # Code Selection
    ///
    /// - A non-empty `requested_code` is validated and used as-is
    /// - Otherwise a random 6-character code is generated. A generated code
    ///   that collides with an existing one is reported as a conflict and not
    ///   retried; with 62^6 codes this is a known, low-probability gap.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid or the validity
    /// window is zero or out of range.
    /// Returns [`AppError::InvalidFormat`] if the requested code is invalid.
    /// Returns [`AppError::Conflict`] if the code already exists, live or expired.
    pub async fn create(
        &self,
        original_url: &str,
        validity_minutes: u32,
        requested_code: Option<String>,
    ) -> Result<CreatedLink, AppError> {
        let original_url = normalize_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if validity_minutes == 0 {
            return Err(AppError::bad_request(
                "Validity must be a positive number of minutes",
                json!({ "validity": validity_minutes }),
            ));
        }

        let code = match requested_code.filter(|c| !c.is_empty()) {
            Some(code) => {
                validate_shortcode(&code)?;
                code
            }
            None => generate_code(),
        };

        let created_at = Utc::now();
        let expires_at = TimeDelta::try_minutes(i64::from(validity_minutes))
            .and_then(|validity| created_at.checked_add_signed(validity))
            .ok_or_else(|| {
                AppError::bad_request(
                    "Validity is out of range",
                    json!({ "validity": validity_minutes }),
                )
            })?;

        let link = self
            .link_repository
            .create(NewLink {
                code,
                original_url,
                created_at,
                expires_at,
            })
            .await?;

        debug!(code = %link.code, "Short link created");

        let short_link = self.get_short_url(&link.code);
        Ok(CreatedLink { link, short_link })
    }

    /// Resolves a shortcode to its original URL, recording the click.
    ///
    /// The expiry check, counter increment and click append happen as one
    /// unit in the repository; on error none of them take effect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Expired`] if the link is past its expiry.
    pub async fn resolve(&self, code: &str, click: NewClick) -> Result<String, AppError> {
        let link = self
            .link_repository
            .resolve(code, click, Utc::now())
            .await?;

        debug!(code = %link.code, clicks = link.clicks, "Short link resolved");

        Ok(link.original_url)
    }

    /// Number of links ever created in this process.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the fully-qualified short link for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
