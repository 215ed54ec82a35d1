//! HTTP retrieval of target pages and favicons

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Desktop Chrome user agent; many sites serve stripped markup to unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_2) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// A fetched HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL the page was served from after following redirects.
    pub final_url: Url,
    pub html: String,
}

/// Source of remote pages and icons.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET a page as text.
    async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, FetchError>;

    /// GET a binary resource.
    async fn download(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// `reqwest`-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: response.url().clone(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self.get(url).await?;
        let final_url = response.url().clone();

        tracing::debug!(%url, %final_url, "page responded");

        let html = response.text().await.map_err(|source| FetchError::Body {
            url: final_url.clone(),
            source,
        })?;

        Ok(FetchedPage { final_url, html })
    }

    async fn download(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let response = self.get(url).await?;
        let bytes = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.clone(),
            source,
        })?;

        tracing::debug!(%url, size = bytes.len(), "downloaded resource");

        Ok(bytes.to_vec())
    }
}
