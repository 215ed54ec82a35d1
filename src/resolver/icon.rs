//! Icon cascade: per-host override, remote favicon, letter placeholder

use crate::error::{PipelineError, Result};
use crate::fetcher::PageFetcher;
use crate::models::{IconAssets, IconOutcome, TargetConfig};
use std::path::Path;
use tracing::{debug, info, warn};

/// Materialize the app icon for `config` at `dest`.
///
/// The branches are tried in order and the first applicable one is the
/// only one that runs. Nothing is attempted when the page was unreachable.
pub async fn resolve_icon(
    config: &TargetConfig,
    assets: &IconAssets,
    fetcher: &dyn PageFetcher,
    dest: &Path,
) -> Result<IconOutcome> {
    if !config.is_reachable() {
        debug!(host = config.hostname(), "page unreachable, keeping template icon");
        return Ok(IconOutcome::Default);
    }

    // 1. Curated icon for this host
    if let Some(source) = assets.override_for(config.normalized_host()).await {
        copy_asset(&source, dest).await?;
        info!(host = config.normalized_host(), "applied icon override");
        return Ok(IconOutcome::Overridden { source });
    }

    // 2. Favicon declared by the page
    if let Some(href) = config.icon_ref() {
        let url = match config.icon_base().join(href) {
            Ok(url) => url,
            Err(err) => {
                warn!(href, error = %err, "unresolvable favicon href, keeping template icon");
                return Ok(IconOutcome::Default);
            }
        };

        // data:, javascript: etc. are used to suppress the favicon request
        if !matches!(url.scheme(), "http" | "https") {
            debug!(%url, "favicon href is not remote, keeping template icon");
            return Ok(IconOutcome::Default);
        }

        let bytes = fetcher
            .download(&url)
            .await
            .map_err(|source| PipelineError::IconDownload {
                url: url.clone(),
                source,
            })?;
        write_file(dest, &bytes).await?;
        info!(%url, "downloaded favicon");
        return Ok(IconOutcome::Downloaded { url });
    }

    // 3. Letter placeholder
    let Some(letter) = placeholder_letter(config.hostname()) else {
        debug!(host = config.hostname(), "no placeholder letter for host");
        return Ok(IconOutcome::Default);
    };

    match assets.placeholder_for(letter).await {
        Some(source) => {
            copy_asset(&source, dest).await?;
            info!(%letter, "applied placeholder icon");
            Ok(IconOutcome::Placeholder { letter })
        }
        None => {
            warn!(%letter, "placeholder asset missing, keeping template icon");
            Ok(IconOutcome::Default)
        }
    }
}

/// Uppercased first character of `hostname` when it is an ASCII letter.
///
/// Punycode hosts (`xn--...`) get no placeholder since their first letter
/// says nothing about the displayed name.
pub fn placeholder_letter(hostname: &str) -> Option<char> {
    if hostname.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("xn--")) {
        return None;
    }

    hostname
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
}

async fn copy_asset(source: &Path, dest: &Path) -> Result<()> {
    ensure_parent(dest).await?;
    tokio::fs::copy(source, dest)
        .await
        .map_err(|e| PipelineError::io(dest, e))?;
    Ok(())
}

async fn write_file(dest: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(dest).await?;
    tokio::fs::write(dest, bytes)
        .await
        .map_err(|e| PipelineError::io(dest, e))
}

async fn ensure_parent(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| PipelineError::io(parent, e))?;
    }
    Ok(())
}
