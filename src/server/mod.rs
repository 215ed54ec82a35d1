//! HTTP boundary: `POST /generate` returns a package for the posted URL.

use crate::error::PipelineError;
use crate::{Generator, PACKAGE_CONTENT_TYPE};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub url: Option<String>,
}

pub fn router(generator: Arc<Generator>) -> Router {
    Router::new()
        .route("/generate", post(handle_generate))
        .route("/health", get(handle_health))
        .with_state(generator)
}

/// Serve the API on `addr` until the process is stopped.
pub async fn serve(addr: &str, generator: Arc<Generator>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(generator)).await?;
    Ok(())
}

async fn handle_generate(
    State(generator): State<Arc<Generator>>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let raw_url = request.url.unwrap_or_default();

    match generator.generate(&raw_url).await {
        Ok(package) => {
            let headers = [
                (header::CONTENT_TYPE, PACKAGE_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", package.filename),
                ),
            ];
            (headers, package.bytes).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: PipelineError) -> Response {
    let status = match &err {
        e if e.is_user_error() => StatusCode::BAD_REQUEST,
        PipelineError::IconDownload { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = ?err, "generation failed");
    } else {
        tracing::debug!(error = %err, "rejected request");
    }

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use url::Url;

    #[test]
    fn test_error_status_mapping() {
        let status = |err| error_response(err).status();

        assert_eq!(status(PipelineError::InvalidInput), StatusCode::BAD_REQUEST);
        assert_eq!(status(PipelineError::InvalidUrl("x".into())), StatusCode::BAD_REQUEST);

        let url = Url::parse("https://example.com/fav.ico").unwrap();
        let download = PipelineError::IconDownload {
            url: url.clone(),
            source: FetchError::Status { url, status: 404 },
        };
        assert_eq!(status(download), StatusCode::BAD_GATEWAY);

        let packaging = PipelineError::Packaging(anyhow::anyhow!("zip"));
        assert_eq!(status(packaging), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
