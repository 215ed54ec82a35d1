//! Per-request staging of the extension template

use crate::models::{AppManifest, TargetConfig};
use crate::parser::manifest::parse_manifest_from_file;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

const MANIFEST_FILE: &str = "manifest.json";

/// A private copy of the template directory plus its parsed manifest.
///
/// The copy lives in a temporary directory that is removed on drop, so
/// concurrent requests never write to the same icon path.
#[derive(Debug)]
pub struct StagedTemplate {
    dir: TempDir,
    manifest: AppManifest,
}

impl StagedTemplate {
    /// Copy `template_dir` into a fresh temporary directory.
    pub fn stage(template_dir: &Path) -> Result<Self> {
        let manifest_path = template_dir.join(MANIFEST_FILE);
        let manifest = parse_manifest_from_file(&manifest_path)?;

        let dir = TempDir::new().context("Failed to create staging directory")?;

        for entry in WalkDir::new(template_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            let relative_path = path.strip_prefix(template_dir)
                .context("Failed to get relative path")?;
            let dest = dir.path().join(relative_path);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)?;
            } else if entry.file_type().is_file() {
                fs::copy(path, &dest)
                    .with_context(|| format!("Failed to copy {}", path.display()))?;
            }
        }

        Ok(Self { dir, manifest })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest(&self) -> &AppManifest {
        &self.manifest
    }

    /// Name the app after the resolved title and point it at the target URL.
    pub fn apply(&mut self, config: &TargetConfig) {
        self.manifest.name = config.title.clone();
        self.manifest.set_target(&config.source_url);
    }

    /// Absolute path of the declared 128px icon inside the staging directory.
    pub fn icon_path(&self) -> Result<PathBuf> {
        let relative = self.manifest.app_icon()
            .context("Template manifest does not declare icons[\"128\"]")?;
        let relative = Path::new(relative);

        if relative.is_absolute()
            || relative.components().any(|c| matches!(c, std::path::Component::ParentDir))
        {
            anyhow::bail!("Icon path {} escapes the extension directory", relative.display());
        }

        Ok(self.dir.path().join(relative))
    }

    /// Write the edited manifest back into the staging directory.
    pub fn write_manifest(&self) -> Result<()> {
        let manifest_json = serde_json::to_string_pretty(&self.manifest)?;
        fs::write(self.dir.path().join(MANIFEST_FILE), manifest_json)
            .context("Failed to write manifest.json")?;
        Ok(())
    }
}
