//! Display title resolution

use crate::models::{HostOverrides, TargetConfig};

/// Pick the app's display name.
///
/// A per-host override wins over everything, then the page's own title,
/// then the hostname.
pub fn resolve_title(
    extracted: Option<&str>,
    config: &TargetConfig,
    overrides: &HostOverrides,
) -> String {
    if let Some(title) = overrides.title_for(config.normalized_host()) {
        return title.to_string();
    }

    extracted
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| config.hostname())
        .to_string()
}
