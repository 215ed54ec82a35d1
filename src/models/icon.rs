//! Result of the icon cascade

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Which branch of the icon cascade supplied the package icon.
///
/// Exactly one variant is produced per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IconOutcome {
    /// A curated per-host asset was copied in.
    Overridden { source: PathBuf },
    /// The page's favicon was downloaded.
    Downloaded { url: Url },
    /// A letter placeholder was copied in.
    Placeholder { letter: char },
    /// The template's built-in icon was left untouched.
    Default,
}

impl IconOutcome {
    pub fn is_default(&self) -> bool {
        matches!(self, IconOutcome::Default)
    }
}

impl fmt::Display for IconOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconOutcome::Overridden { source } => write!(f, "override ({})", source.display()),
            IconOutcome::Downloaded { url } => write!(f, "favicon ({})", url),
            IconOutcome::Placeholder { letter } => write!(f, "placeholder ({})", letter),
            IconOutcome::Default => write!(f, "template default"),
        }
    }
}
