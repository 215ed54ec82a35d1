//! Report generation

pub mod generator;

use crate::models::TargetConfig;
use crate::GeneratedPackage;

pub fn generate_report(package: &GeneratedPackage) -> String {
    generator::generate_markdown_report(package)
}

pub fn generate_resolution_report(config: &TargetConfig) -> String {
    generator::generate_config_report(config)
}
