//! URL normalization for stored link targets.
//!
//! The stored `original_url` is the normalized form of what the client sent,
//! so stats report exactly the URL that redirects will use.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Normalizes an absolute HTTP(S) URL.
///
/// # Normalization Rules
///
/// 1. **Protocol**: only `http` and `https`
/// 2. **Host**: required
/// 3. **Fragments**: removed
/// 4. **Path and query**: preserved
///
/// Host lowercasing, default port removal (80 for HTTP, 443 for HTTPS) and
/// the `/` for an empty path come from `Url::parse` itself for these schemes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path#top").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    url.set_fragment(None);

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_root_path() {
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_host_is_lowercased_path_is_not() {
        assert_eq!(
            normalize_url("https://ExAmPlE.CoM/Some/Path").unwrap(),
            "https://example.com/Some/Path"
        );
    }

    #[test]
    fn test_default_ports_removed() {
        assert_eq!(
            normalize_url("http://example.com:80/a").unwrap(),
            "http://example.com/a"
        );
        assert_eq!(
            normalize_url("https://example.com:443/a").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_custom_port_kept() {
        assert_eq!(
            normalize_url("http://localhost:8080/api").unwrap(),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn test_fragment_removed_query_kept() {
        assert_eq!(
            normalize_url("https://example.com/search?q=rust&lang=en#results").unwrap(),
            "https://example.com/search?q=rust&lang=en"
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            normalize_url("  https://example.com/x  ").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(matches!(
            normalize_url("/just/a/path"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(matches!(
            normalize_url("example.com"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_non_http_schemes_rejected() {
        for input in [
            "ftp://example.com/file.txt",
            "javascript:alert(1)",
            "mailto:someone@example.com",
            "file:///etc/passwd",
        ] {
            assert!(
                matches!(
                    normalize_url(input),
                    Err(UrlNormalizationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(normalize_url("").is_err());
    }
}
