// src/inspector.rs
//! Placeholder archive inspection
//!
//! Reads a built `.apk` back and checks it against the expected layout.

use crate::archive::{self, ArchiveEntry};
use crate::assets::{EXPECTED_ENTRIES, ICON_PNG_PATH};
use crate::error::Result;
use crate::png::{self, PngSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of the icon check
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IconStatus {
    /// `icon.png` is a structurally valid PNG
    Valid { width: u32, height: u32 },
    /// `icon.png` is present but malformed
    Invalid { reason: String },
    /// No `icon.png` entry
    Missing,
}

/// Inspected archive data
#[derive(Debug, Clone, Serialize)]
pub struct InspectedApk {
    pub path: PathBuf,
    pub entries: Vec<ArchiveEntry>,
    /// Expected entries not found in the archive
    pub missing: Vec<String>,
    /// Entries not part of the placeholder layout
    pub unexpected: Vec<String>,
    pub icon: IconStatus,
}

impl InspectedApk {
    /// Load and check an archive
    pub fn from_file(path: &Path) -> Result<Self> {
        let entries = archive::read_archive(path)?;

        let missing = EXPECTED_ENTRIES
            .iter()
            .filter(|name| !entries.iter().any(|e| e.name == **name))
            .map(|name| name.to_string())
            .collect();
        let unexpected = entries
            .iter()
            .filter(|e| !EXPECTED_ENTRIES.contains(&e.name.as_str()))
            .map(|e| e.name.clone())
            .collect();

        let icon = if entries.iter().any(|e| e.name == ICON_PNG_PATH) {
            let bytes = archive::read_entry(path, ICON_PNG_PATH)?;
            match png::inspect_png(&bytes) {
                Ok(PngSummary { width, height, .. }) => IconStatus::Valid { width, height },
                Err(e) => IconStatus::Invalid {
                    reason: e.to_string(),
                },
            }
        } else {
            IconStatus::Missing
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            missing,
            unexpected,
            icon,
        })
    }

    /// True when exactly the expected entries exist and the icon is valid
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
            && self.unexpected.is_empty()
            && self.entries.len() == EXPECTED_ENTRIES.len()
            && matches!(self.icon, IconStatus::Valid { .. })
    }

    /// Sum of uncompressed entry sizes
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

/// Print archive summary
pub fn print_summary(apk: &InspectedApk) {
    println!("Archive: {}", apk.path.display());
    println!("Entries: {}", apk.entries.len());
    println!("Total size: {} bytes", apk.total_size());
    println!();

    for entry in &apk.entries {
        println!("  {:<24} {:>6} bytes  {}", entry.name, entry.size, &entry.sha256[..16]);
    }

    println!();
    match &apk.icon {
        IconStatus::Valid { width, height } => println!("Icon: valid PNG ({}x{})", width, height),
        IconStatus::Invalid { reason } => println!("Icon: invalid ({})", reason),
        IconStatus::Missing => println!("Icon: missing"),
    }
    for name in &apk.missing {
        println!("Missing: {}", name);
    }
    for name in &apk.unexpected {
        println!("Unexpected: {}", name);
    }
    println!(
        "Layout: {}",
        if apk.is_complete() { "complete" } else { "incomplete" }
    );
}
