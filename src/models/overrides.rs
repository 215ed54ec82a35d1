//! Per-host override tables and icon asset locations

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Built-in title corrections, keyed by normalized host.
static DEFAULT_TITLES: &[(&str, &str)] = &[
    // Messenger's <title> renders as stray control characters
    ("messenger.com", "Messenger"),
];

/// Hostname → literal title corrections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOverrides {
    titles: HashMap<String, String>,
}

impl Default for HostOverrides {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_TITLES.iter().copied())
    }
}

impl HostOverrides {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let titles = pairs
            .into_iter()
            .map(|(host, title)| (host.as_ref().to_lowercase(), title.into()))
            .collect();
        Self { titles }
    }

    /// Add or replace entries, later entries win.
    pub fn extend<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (host, title) in pairs {
            self.titles.insert(host.as_ref().to_lowercase(), title.into());
        }
    }

    pub fn title_for(&self, normalized_host: &str) -> Option<&str> {
        self.titles.get(normalized_host).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// On-disk icon assets used by the icon cascade.
///
/// Curated icons live at `<overrides_dir>/<normalized host>.png` and the
/// letter placeholders at `<fallback_dir>/<LETTER>.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAssets {
    pub overrides_dir: PathBuf,
    pub fallback_dir: PathBuf,
}

impl IconAssets {
    pub fn new(overrides_dir: impl Into<PathBuf>, fallback_dir: impl Into<PathBuf>) -> Self {
        Self {
            overrides_dir: overrides_dir.into(),
            fallback_dir: fallback_dir.into(),
        }
    }

    pub fn override_path(&self, normalized_host: &str) -> PathBuf {
        self.overrides_dir.join(format!("{}.png", normalized_host))
    }

    pub fn placeholder_path(&self, letter: char) -> PathBuf {
        self.fallback_dir.join(format!("{}.png", letter))
    }

    /// Curated icon for `normalized_host`, if one has been supplied.
    pub async fn override_for(&self, normalized_host: &str) -> Option<PathBuf> {
        // Path separators in a host would escape the overrides directory
        if normalized_host.is_empty() || normalized_host.contains(|c| c == '/' || c == '\\') {
            return None;
        }
        let path = self.override_path(normalized_host);
        is_file(&path).await.then_some(path)
    }

    pub async fn placeholder_for(&self, letter: char) -> Option<PathBuf> {
        let path = self.placeholder_path(letter);
        is_file(&path).await.then_some(path)
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_titles_include_messenger() {
        let overrides = HostOverrides::default();
        assert_eq!(overrides.title_for("messenger.com"), Some("Messenger"));
        assert_eq!(overrides.title_for("example.com"), None);
    }

    #[test]
    fn test_extend_replaces_and_lowercases() {
        let mut overrides = HostOverrides::default();
        overrides.extend([("Messenger.COM", "FB Messenger"), ("mail.example.com", "Mail")]);

        assert_eq!(overrides.title_for("messenger.com"), Some("FB Messenger"));
        assert_eq!(overrides.title_for("mail.example.com"), Some("Mail"));
        assert_eq!(overrides.len(), 2);
    }

    #[tokio::test]
    async fn test_override_lookup_by_host() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("github.com.png"), b"png").unwrap();
        let assets = IconAssets::new(dir.path(), dir.path());

        assert_eq!(
            assets.override_for("github.com").await,
            Some(dir.path().join("github.com.png"))
        );
        assert_eq!(assets.override_for("gitlab.com").await, None);
        assert_eq!(assets.override_for("../github.com").await, None);
    }

    #[tokio::test]
    async fn test_placeholder_lookup_by_letter() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("G.png"), b"png").unwrap();
        let assets = IconAssets::new(dir.path(), dir.path());

        assert!(assets.placeholder_for('G').await.is_some());
        assert!(assets.placeholder_for('H').await.is_none());
    }
}
