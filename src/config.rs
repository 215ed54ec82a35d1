//! Settings loaded from an optional TOML file.

use crate::fetcher::{FetcherConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::models::{HostOverrides, IconAssets};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Service configuration. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Extension template: `manifest.json` plus the default icon.
    pub template_dir: PathBuf,
    /// Curated icons named `<host>.png`.
    pub overrides_dir: PathBuf,
    /// Letter placeholders named `A.png` .. `Z.png`.
    pub fallback_dir: PathBuf,
    pub user_agent: String,
    /// Per-request timeout for page and icon fetches.
    pub fetch_timeout_secs: u64,
    pub max_redirects: usize,
    /// Listen address for `serve`.
    pub bind_addr: String,
    /// Extra title overrides, merged over the built-in table.
    pub titles: BTreeMap<String, String>,
}

/// Environment variable naming the asset root when no config file does.
pub const ASSETS_ENV: &str = "SITE2CRX_ASSETS";

const ASSETS_DIR: &str = "assets";
const TEMPLATE_MANIFEST: &str = "template/manifest.json";

impl Default for Settings {
    fn default() -> Self {
        Self::with_assets_root(default_assets_root())
    }
}

/// Asset root used by [`Settings::default`].
///
/// `$SITE2CRX_ASSETS` wins when set. Otherwise the first of `./assets` and
/// `assets/` next to the executable that holds a template is used, and
/// `./assets` when neither does.
pub fn default_assets_root() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    locate_assets_root(
        std::env::var_os(ASSETS_ENV).map(PathBuf::from),
        PathBuf::from(ASSETS_DIR),
        exe_dir.as_deref(),
    )
}

fn locate_assets_root(from_env: Option<PathBuf>, cwd_root: PathBuf, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(root) = from_env.filter(|root| !root.as_os_str().is_empty()) {
        return root;
    }

    std::iter::once(cwd_root.clone())
        .chain(exe_dir.map(|dir| dir.join(ASSETS_DIR)))
        .find(|root| root.join(TEMPLATE_MANIFEST).is_file())
        .unwrap_or(cwd_root)
}

impl Settings {
    /// Defaults with every asset directory under `root`.
    pub fn with_assets_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            template_dir: root.join("template"),
            overrides_dir: root.join("icons"),
            fallback_dir: root.join("fallback"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            bind_addr: "127.0.0.1:3000".to_string(),
            titles: BTreeMap::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        if settings.fetch_timeout_secs == 0 {
            anyhow::bail!("fetch_timeout_secs must be greater than zero");
        }
        Ok(settings)
    }

    /// Fail early when `template_dir` holds no template manifest.
    pub fn ensure_template(&self) -> Result<()> {
        let manifest = self.template_dir.join("manifest.json");
        if !manifest.is_file() {
            anyhow::bail!(
                "Extension template not found at {} (set template_dir with --config or {})",
                manifest.display(),
                ASSETS_ENV
            );
        }
        Ok(())
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.fetch_timeout_secs),
            max_redirects: self.max_redirects,
        }
    }

    pub fn host_overrides(&self) -> HostOverrides {
        let mut overrides = HostOverrides::default();
        overrides.extend(self.titles.iter());
        overrides
    }

    pub fn icon_assets(&self) -> IconAssets {
        IconAssets::new(&self.overrides_dir, &self.fallback_dir)
    }
}
