//! Site shortcut app generator
//!
//! Turns a web page URL into an installable Chrome hosted app that launches
//! that page. The page is fetched best-effort to pick up its title and
//! favicon; curated per-host overrides and letter placeholders fill the gaps.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod packager;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod validator;
#[cfg(feature = "server")]
pub mod server;

pub use config::Settings;
pub use error::{FetchError, PipelineError};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use models::{IconOutcome, TargetConfig};
pub use packager::{Packager, ZipPackager};
pub use resolver::build_target_config;

use anyhow::Context;
use error::Result;
use models::{HostOverrides, IconAssets};
use packager::StagedTemplate;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// MIME type browsers install extension packages from.
pub const PACKAGE_CONTENT_TYPE: &str = "application/x-chrome-extension";

/// A finished package ready to be sent or saved.
#[derive(Debug, Clone)]
pub struct GeneratedPackage {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub config: TargetConfig,
    pub icon: IconOutcome,
}

/// Runs the whole URL → package pipeline.
///
/// Holds only read-only collaborators, so one instance can serve any
/// number of concurrent requests.
pub struct Generator {
    fetcher: Box<dyn PageFetcher>,
    packager: Arc<dyn Packager>,
    overrides: HostOverrides,
    assets: IconAssets,
    template_dir: PathBuf,
}

impl Generator {
    /// Generator with an HTTP fetcher and ZIP packager configured from `settings`.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        settings.ensure_template()?;
        let fetcher = HttpFetcher::new(&settings.fetcher_config())?;
        Ok(Self::with_parts(
            Box::new(fetcher),
            Arc::new(ZipPackager),
            settings.host_overrides(),
            settings.icon_assets(),
            settings.template_dir.clone(),
        ))
    }

    pub fn with_parts(
        fetcher: Box<dyn PageFetcher>,
        packager: Arc<dyn Packager>,
        overrides: HostOverrides,
        assets: IconAssets,
        template_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            packager,
            overrides,
            assets,
            template_dir: template_dir.into(),
        }
    }

    /// Resolve the target configuration without packaging anything.
    pub async fn resolve(&self, raw_url: &str) -> Result<TargetConfig> {
        build_target_config(raw_url, self.fetcher.as_ref(), &self.overrides).await
    }

    /// Build the package for `raw_url`.
    pub async fn generate(&self, raw_url: &str) -> Result<GeneratedPackage> {
        // 1. Resolve title and icon reference
        let config = self.resolve(raw_url).await?;
        info!(url = %config.url(), title = %config.title, "resolved target");

        // 2. Stage a private copy of the template
        let template_dir = self.template_dir.clone();
        let mut staged = tokio::task::spawn_blocking(move || StagedTemplate::stage(&template_dir))
            .await
            .context("Template staging task failed")??;
        staged.apply(&config);

        // 3. Materialize the icon where the manifest expects it
        let icon_path = staged.icon_path()?;
        let icon = resolver::resolve_icon(&config, &self.assets, self.fetcher.as_ref(), &icon_path).await?;
        info!(icon = %icon, "resolved icon");

        // 4. Validate and pack
        validator::validate_extension(&staged)?;
        staged.write_manifest()?;

        let packager = Arc::clone(&self.packager);
        let bytes = tokio::task::spawn_blocking(move || packager.pack(staged.path()))
            .await
            .context("Packaging task failed")??;
        info!(filename = %config.filename, size = bytes.len(), "package built");

        Ok(GeneratedPackage {
            filename: config.filename.clone(),
            bytes,
            config,
            icon,
        })
    }
}
