//! Manifest data structures for Chrome hosted apps

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Size key of the icon the shortcut app is displayed with.
pub const APP_ICON_SIZE: &str = "128";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppManifest {
    pub manifest_version: u8,
    pub name: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub icons: BTreeMap<String, String>,

    #[serde(default)]
    pub app: HostedApp,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostedApp {
    #[serde(default)]
    pub urls: Vec<String>,

    #[serde(default)]
    pub launch: Launch,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Launch {
    #[serde(default)]
    pub web_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl AppManifest {
    /// Relative path of the app icon inside the extension directory.
    pub fn app_icon(&self) -> Option<&str> {
        self.icons.get(APP_ICON_SIZE).map(String::as_str)
    }

    /// Point the app at `url`: grant it and launch it.
    pub fn set_target(&mut self, url: &str) {
        if !self.app.urls.iter().any(|u| u == url) {
            self.app.urls.push(url.to_string());
        }
        self.app.launch.web_url = url.to_string();
    }
}
