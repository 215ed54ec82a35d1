//! Resolved configuration for a single shortcut-app request

use serde::Serialize;
use url::Url;

/// Everything the packager needs to know about the target site.
///
/// Created once per request by the assembler and owned by that request
/// until it is handed to the packager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetConfig {
    pub source_url: String,
    url: Url,
    normalized_host: String,
    pub title: String,
    pub page: PageState,
    pub filename: String,
}

/// Outcome of the best-effort page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageState {
    /// The page could not be fetched; defaults were kept.
    Unreachable,
    Fetched {
        /// URL after redirects, used as the base for relative icon hrefs.
        final_url: Url,
        icon_ref: Option<String>,
    },
}

impl TargetConfig {
    /// Build the default configuration: title and filename both derive
    /// from the hostname, and the page is considered unreachable until
    /// the assembler records a successful fetch.
    pub fn new(source_url: impl Into<String>, url: Url) -> Self {
        let hostname = url.host_str().unwrap_or_default().to_string();
        let normalized_host = normalize_host(&hostname);

        Self {
            source_url: source_url.into(),
            title: hostname.clone(),
            filename: format!("{}.crx", hostname),
            normalized_host,
            page: PageState::Unreachable,
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn hostname(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Lowercase host without a leading `www.`; lookup key for overrides.
    pub fn normalized_host(&self) -> &str {
        &self.normalized_host
    }

    pub fn icon_ref(&self) -> Option<&str> {
        match &self.page {
            PageState::Fetched { icon_ref, .. } => icon_ref.as_deref(),
            PageState::Unreachable => None,
        }
    }

    /// Base URL for resolving relative icon references.
    pub fn icon_base(&self) -> &Url {
        match &self.page {
            PageState::Fetched { final_url, .. } => final_url,
            PageState::Unreachable => &self.url,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.page, PageState::Fetched { .. })
    }
}

/// Lowercase a hostname and strip the root label dot of a fully
/// qualified name plus one leading `www.`.
pub fn normalize_host(hostname: &str) -> String {
    let lower = hostname.to_lowercase();
    let lower = lower.strip_suffix('.').unwrap_or(&lower);
    lower.strip_prefix("www.").unwrap_or(lower).to_string()
}
