// src/archive.rs
//! ZIP archive writing and reading
//!
//! The placeholder `.apk` is a plain ZIP container. Entries are written in
//! depth-first order with names relative to the source directory, always
//! using `/` as the separator.

use crate::error::{Error, Result};
use crate::hash;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Compression used for archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Deflate at the library's default level
    #[default]
    Deflated,
    /// No compression
    Stored,
}

impl Compression {
    fn method(self) -> CompressionMethod {
        match self {
            Self::Deflated => CompressionMethod::Deflated,
            Self::Stored => CompressionMethod::Stored,
        }
    }
}

/// A single file stored in an archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    /// Entry name, `/`-separated
    pub name: String,
    /// Uncompressed size in bytes
    pub size: u64,
    /// SHA-256 of the uncompressed content
    pub sha256: String,
}

/// Archive every file under `source_dir` into a ZIP at `output_path`
///
/// The parent directory of `output_path` must already exist; it is never
/// created. An existing file at `output_path` is overwritten.
pub fn write_archive(
    source_dir: &Path,
    output_path: &Path,
    compression: Compression,
) -> Result<Vec<ArchiveEntry>> {
    ensure_parent_exists(output_path)?;

    let options = SimpleFileOptions::default()
        .compression_method(compression.method())
        .unix_permissions(0o644);

    let output_file = File::create(output_path)?;
    let mut writer = ZipWriter::new(output_file);
    let mut entries = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry?;

        // Directories are implied by their children
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry_name(source_dir, entry.path())?;
        let content = fs::read(entry.path())?;

        writer.start_file(name.as_str(), options)?;
        writer.write_all(&content)?;
        debug!("Archived {} ({} bytes)", name, content.len());

        entries.push(ArchiveEntry {
            name,
            size: content.len() as u64,
            sha256: hash::sha256(&content),
        });
    }

    writer.finish()?.flush()?;
    info!(
        "Wrote {} entries to {}",
        entries.len(),
        output_path.display()
    );

    Ok(entries)
}

/// List the file entries of an existing archive, in stored order
pub fn read_archive(path: &Path) -> Result<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }
        let name = file.name().to_string();
        let size = file.size();
        let sha256 = hash::sha256_reader(&mut file)?;
        entries.push(ArchiveEntry { name, size, sha256 });
    }

    Ok(entries)
}

/// Read the full content of one entry
pub fn read_entry(path: &Path, name: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(Error::EntryNotFound(name.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    // The declared size comes from the archive header, so don't trust it
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(content)
}

fn ensure_parent_exists(output_path: &Path) -> Result<()> {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(Error::OutputParentMissing(parent.to_path_buf()))
        }
        _ => Ok(()),
    }
}

/// Archive name for `path`: relative to `root`, components joined with `/`
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::OutsideWorkspace(path.to_path_buf()))?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
