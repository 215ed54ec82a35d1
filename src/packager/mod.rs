//! Template staging and package building

pub mod template;
pub mod builder;

pub use builder::{create_zip_from_directory, Packager, ZipPackager};
pub use template::StagedTemplate;
