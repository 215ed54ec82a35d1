//! Parsing modules for target URLs, page markup and template manifests

pub mod url;
pub mod html;
pub mod manifest;

pub use self::url::validate;
pub use html::{extract, PageMetadata};
pub use manifest::parse_manifest;
