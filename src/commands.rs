// src/commands.rs
//! Command handlers for the placeholder-apk CLI

use anyhow::{Context, Result};
use placeholder_apk::builder::{self, ApkBuilder, BuildConfig};
use placeholder_apk::inspector::{self, InspectedApk};
use placeholder_apk::Compression;
use std::path::{Path, PathBuf};
use tracing::info;

/// Build the placeholder archive and print the confirmation lines
pub fn cmd_build(output: &str, workdir: &str, store: bool) -> Result<()> {
    let config = BuildConfig {
        output_path: PathBuf::from(output),
        workspace_dir: PathBuf::from(workdir),
        compression: if store {
            Compression::Stored
        } else {
            Compression::Deflated
        },
    };
    info!("Building placeholder archive: {:?}", config);

    let report = ApkBuilder::new(config)
        .build()
        .with_context(|| format!("Failed to build placeholder archive at {}", output))?;

    builder::print_build_summary(&report);
    Ok(())
}

/// Inspect an existing archive
pub fn cmd_inspect(path: &str, json: bool) -> Result<()> {
    let apk = InspectedApk::from_file(Path::new(path))
        .with_context(|| format!("Failed to read archive {}", path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&apk)?);
    } else {
        inspector::print_summary(&apk);
    }

    if !apk.is_complete() {
        anyhow::bail!("{} does not match the placeholder layout", path);
    }
    Ok(())
}
