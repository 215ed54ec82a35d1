//! Template manifest parsing

use crate::models::AppManifest;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse manifest.json from bytes
pub fn parse_manifest(content: &[u8]) -> Result<AppManifest> {
    let content_str = std::str::from_utf8(content)
        .context("Invalid UTF-8 in manifest.json")?;

    // json5 so template authors can leave comments in the manifest
    let manifest: AppManifest = json5::from_str(content_str)
        .context("Failed to parse manifest.json")?;

    if manifest.manifest_version != 2 && manifest.manifest_version != 3 {
        anyhow::bail!("Unsupported manifest version: {}", manifest.manifest_version);
    }

    Ok(manifest)
}

/// Parse manifest.json from file path
pub fn parse_manifest_from_file(path: impl AsRef<Path>) -> Result<AppManifest> {
    let path = path.as_ref();
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_manifest(&content)
}

/// Parse manifest.json from string
pub fn parse_manifest_from_str(content: &str) -> Result<AppManifest> {
    parse_manifest(content.as_bytes())
}
