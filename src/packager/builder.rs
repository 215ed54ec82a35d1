//! Extension archive builder

use anyhow::{Context, Result};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Turns a staged extension directory into package bytes.
///
/// Signing, if any, belongs to the implementation.
pub trait Packager: Send + Sync {
    fn pack(&self, source_dir: &Path) -> Result<Vec<u8>>;
}

/// Packs the directory as a deflated ZIP archive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackager;

impl Packager for ZipPackager {
    fn pack(&self, source_dir: &Path) -> Result<Vec<u8>> {
        create_zip_from_directory(source_dir)
    }
}

pub fn create_zip_from_directory(source_dir: &Path) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut entries: Vec<_> = WalkDir::new(source_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();
    // Stable archive order regardless of filesystem iteration order
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    for entry in entries {
        let path = entry.path();
        let relative_path = path.strip_prefix(source_dir)
            .context("Failed to get relative path")?;
        // ZIP entry names always use forward slashes
        let name = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(name, options)?;
        let content = fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        zip.write_all(&content)?;
    }

    let cursor = zip.finish().context("Failed to finalize archive")?;
    Ok(cursor.into_inner())
}
