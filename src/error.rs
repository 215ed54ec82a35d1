//! Error taxonomy for the generation pipeline

use std::path::PathBuf;
use thiserror::Error;
use url::Url;

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Please provide a URL to continue.")]
    InvalidInput,

    #[error("Please provide a valid URL for your extension. (It must start with http(s)://)")]
    InvalidUrl(String),

    #[error("failed to download icon from {url}")]
    IconDownload {
        url: Url,
        #[source]
        source: FetchError,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("packaging failed: {0:#}")]
    Packaging(#[from] anyhow::Error),
}

impl PipelineError {
    /// Errors caused by the request itself rather than the service.
    pub fn is_user_error(&self) -> bool {
        matches!(self, PipelineError::InvalidInput | PipelineError::InvalidUrl(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A remote resource could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: Url, status: u16 },

    #[error("failed to read response body from {url}")]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}
