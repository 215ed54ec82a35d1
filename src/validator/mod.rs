//! Validation module

pub mod structure;

use crate::packager::StagedTemplate;
use anyhow::Result;

/// Check a staged extension before it is packed.
pub fn validate_extension(staged: &StagedTemplate) -> Result<()> {
    structure::validate_structure(staged)
}
