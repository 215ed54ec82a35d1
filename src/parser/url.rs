//! Target URL validation

use crate::error::{PipelineError, Result};
use url::Url;

/// Parse and validate a user-supplied target URL.
///
/// Only absolute `http`/`https` URLs with a host are accepted.
pub fn validate(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PipelineError::InvalidInput);
    }

    let url = Url::parse(raw).map_err(|_| PipelineError::InvalidUrl(raw.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(PipelineError::InvalidUrl(raw.to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(PipelineError::InvalidUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_accepts_http_and_https() {
        let url = validate("https://example.com/path?q=1").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/path");
        assert_eq!(url.query(), Some("q=1"));

        assert!(validate("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let url = validate("  https://example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace")]
    fn test_rejects_missing_input(raw: &str) {
        assert!(matches!(validate(raw), Err(PipelineError::InvalidInput)));
    }

    #[test_case("example.com"; "no scheme")]
    #[test_case("ftp://example.com/file"; "ftp")]
    #[test_case("file:///etc/passwd"; "file")]
    #[test_case("javascript:alert(1)"; "javascript")]
    #[test_case("http://"; "no host")]
    #[test_case("not a url"; "garbage")]
    fn test_rejects_invalid_urls(raw: &str) {
        assert!(matches!(validate(raw), Err(PipelineError::InvalidUrl(_))));
    }
}
