//! Structural validation

use crate::packager::StagedTemplate;
use anyhow::Result;

pub fn validate_structure(staged: &StagedTemplate) -> Result<()> {
    validate_manifest(staged.manifest())?;
    validate_files(staged)?;
    Ok(())
}

fn validate_manifest(manifest: &crate::models::AppManifest) -> Result<()> {
    if manifest.name.trim().is_empty() {
        anyhow::bail!("Manifest name is required");
    }

    if manifest.version.is_empty() {
        anyhow::bail!("Manifest version is required");
    }

    let web_url = &manifest.app.launch.web_url;
    if web_url.is_empty() {
        anyhow::bail!("app.launch.web_url is required");
    }

    if !manifest.app.urls.iter().any(|u| u == web_url) {
        anyhow::bail!("app.urls must include the launch URL {}", web_url);
    }

    Ok(())
}

fn validate_files(staged: &StagedTemplate) -> Result<()> {
    let icon = staged.icon_path()?;
    if !icon.is_file() {
        anyhow::bail!("Icon file {} is missing from the template", icon.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TargetConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use url::Url;

    fn template(with_icon: bool) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("manifest.json"),
            r#"{
                "manifest_version": 2,
                "name": "Shortcut",
                "version": "1.0",
                "icons": { "128": "icon_128.png" },
                "app": { "urls": [], "launch": { "web_url": "" } }
            }"#,
        )
        .unwrap();
        if with_icon {
            fs::write(dir.path().join("icon_128.png"), b"png").unwrap();
        }
        dir
    }

    fn target() -> TargetConfig {
        let raw = "https://example.com/";
        TargetConfig::new(raw, Url::parse(raw).unwrap())
    }

    fn staged(dir: &Path) -> StagedTemplate {
        StagedTemplate::stage(dir).unwrap()
    }

    #[test]
    fn test_applied_template_is_valid() {
        let dir = template(true);
        let mut staged = staged(dir.path());
        staged.apply(&target());

        assert!(validate_structure(&staged).is_ok());
    }

    #[test]
    fn test_unapplied_template_lacks_launch_url() {
        let dir = template(true);
        let err = validate_structure(&staged(dir.path())).unwrap_err();
        assert!(err.to_string().contains("web_url"));
    }

    #[test]
    fn test_missing_icon_file() {
        let dir = template(false);
        let mut staged = staged(dir.path());
        staged.apply(&target());

        let err = validate_structure(&staged).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
