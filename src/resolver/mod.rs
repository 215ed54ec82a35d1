//! Target configuration resolution
//!
//! Turns a raw URL into a [`TargetConfig`]: validation is the only hard
//! gate, the page fetch is best-effort, and title/icon resolution only run
//! on what the page actually provided.

pub mod title;
pub mod icon;

pub use icon::{placeholder_letter, resolve_icon};
pub use title::resolve_title;

use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::models::{HostOverrides, PageState, TargetConfig};
use crate::parser;
use tracing::{debug, warn};

/// Resolve the configuration for `raw_url`.
///
/// Fails only when the URL itself is invalid. An unreachable or broken page
/// yields the default configuration (hostname title, no icon reference).
pub async fn build_target_config(
    raw_url: &str,
    fetcher: &dyn PageFetcher,
    overrides: &HostOverrides,
) -> Result<TargetConfig> {
    let url = parser::validate(raw_url)?;
    let mut config = TargetConfig::new(raw_url.trim(), url);

    let page = match fetcher.fetch_page(config.url()).await {
        Ok(page) => page,
        Err(err) => {
            warn!(url = %config.url(), error = %err, "page fetch failed, using defaults");
            return Ok(config);
        }
    };

    let metadata = parser::extract(&page.html);
    debug!(
        title = metadata.title.as_deref(),
        icon = metadata.icon_ref.as_deref(),
        "extracted page metadata"
    );

    config.title = resolve_title(metadata.title.as_deref(), &config, overrides);
    config.page = PageState::Fetched {
        final_url: page.final_url,
        icon_ref: metadata.icon_ref,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, PipelineError};
    use crate::fetcher::FetchedPage;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use url::Url;

    /// Serves one fixed page, or fails every request when `html` is `None`.
    struct StaticSite {
        html: Option<&'static str>,
        requests: AtomicUsize,
    }

    impl StaticSite {
        fn serving(html: &'static str) -> Self {
            Self { html: Some(html), requests: AtomicUsize::new(0) }
        }

        fn unreachable() -> Self {
            Self { html: None, requests: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl PageFetcher for StaticSite {
        async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, FetchError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            match self.html {
                Some(html) => Ok(FetchedPage { final_url: url.clone(), html: html.to_string() }),
                None => Err(FetchError::Status { url: url.clone(), status: 503 }),
            }
        }

        async fn download(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Status { url: url.clone(), status: 404 })
        }
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_request() {
        let site = StaticSite::serving("<title>Never</title>");
        let overrides = HostOverrides::default();

        for raw in ["", "   ", "ftp://example.com", "example.com"] {
            let err = build_target_config(raw, &site, &overrides).await.unwrap_err();
            assert!(err.is_user_error(), "{raw:?} should be rejected");
        }
        assert!(matches!(
            build_target_config("", &site, &overrides).await,
            Err(PipelineError::InvalidInput)
        ));
        assert_eq!(site.requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reachable_page_title_and_no_icon() {
        let site = StaticSite::serving("<html><head><title>Example</title></head></html>");
        let config = build_target_config("https://example.com/", &site, &HostOverrides::default())
            .await
            .unwrap();

        assert_eq!(config.title, "Example");
        assert_eq!(config.icon_ref(), None);
        assert!(config.is_reachable());
        assert_eq!(config.filename, "example.com.crx");
    }

    #[tokio::test]
    async fn test_icon_ref_is_recorded() {
        let site = StaticSite::serving(r#"<link rel="icon" href="/fav.png"><title>Site</title>"#);
        let config = build_target_config("https://example.com/", &site, &HostOverrides::default())
            .await
            .unwrap();

        assert_eq!(config.icon_ref(), Some("/fav.png"));
    }

    #[tokio::test]
    async fn test_override_title_ignores_page() {
        let site = StaticSite::serving("<title>\u{8234} (3) \u{8234}</title>");
        let config = build_target_config("https://www.messenger.com/", &site, &HostOverrides::default())
            .await
            .unwrap();

        assert_eq!(config.title, "Messenger");
    }

    #[tokio::test]
    async fn test_unreachable_page_keeps_defaults() {
        let site = StaticSite::unreachable();
        let overrides = HostOverrides::default();

        let first = build_target_config("https://intranet.example/", &site, &overrides)
            .await
            .unwrap();
        let second = build_target_config("https://intranet.example/", &site, &overrides)
            .await
            .unwrap();

        assert_eq!(first.title, "intranet.example");
        assert_eq!(first.page, PageState::Unreachable);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_hostname_normalization_is_shared() {
        let site = StaticSite::unreachable();
        let overrides = HostOverrides::default();

        let upper = build_target_config("https://WWW.Example.com/x", &site, &overrides)
            .await
            .unwrap();
        let plain = build_target_config("https://example.com/x", &site, &overrides)
            .await
            .unwrap();

        assert_eq!(upper.normalized_host(), "example.com");
        assert_eq!(upper.normalized_host(), plain.normalized_host());
    }
}
