// src/builder.rs
//! Placeholder APK builder
//!
//! Stages the fixed placeholder files in a workspace directory, archives the
//! workspace into a ZIP with an `.apk` name, and removes the workspace.

use crate::archive::{self, ArchiveEntry, Compression};
use crate::assets::placeholder_assets;
use crate::error::{Error, Result};
use crate::workspace::{Workspace, DEFAULT_WORKSPACE_DIR};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default output path, relative to the current directory
pub const DEFAULT_OUTPUT_PATH: &str = "apk/report-system-app.apk";

/// Build settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Where the archive is written (parent directory must exist)
    pub output_path: PathBuf,
    /// Staging directory, created and removed during the build
    pub workspace_dir: PathBuf,
    /// Entry compression
    pub compression: Compression,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            workspace_dir: PathBuf::from(DEFAULT_WORKSPACE_DIR),
            compression: Compression::default(),
        }
    }
}

impl BuildConfig {
    /// Default settings with a different output path
    pub fn with_output(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Reject an output path that lands inside the workspace tree
    ///
    /// Both paths are resolved through their nearest existing ancestor, so
    /// the check holds before the workspace has been created.
    pub fn validate(&self) -> Result<()> {
        let output = resolve(&self.output_path)?;
        let workspace = resolve(&self.workspace_dir)?;
        if output.starts_with(&workspace) {
            return Err(Error::OutputInsideWorkspace {
                output: self.output_path.clone(),
                workspace: self.workspace_dir.clone(),
            });
        }
        Ok(())
    }
}

/// Absolute path with the longest existing prefix canonicalized
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut rest = Vec::new();

    loop {
        if existing.exists() {
            let mut resolved = existing.canonicalize()?;
            resolved.extend(rest.iter().rev());
            return Ok(resolved);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_owned());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }
}

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Path of the written archive
    pub output_path: PathBuf,
    /// Entries in archive order
    pub entries: Vec<ArchiveEntry>,
    /// Sum of uncompressed entry sizes
    pub total_size: u64,
}

/// Builds the placeholder archive
pub struct ApkBuilder {
    config: BuildConfig,
}

impl ApkBuilder {
    /// Create a new builder
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the archive
    ///
    /// The workspace is created, populated, archived and removed in that
    /// order. On failure the workspace is still removed when the guard drops.
    pub fn build(&self) -> Result<BuildReport> {
        self.config.validate()?;

        let workspace = Workspace::create(&self.config.workspace_dir)?;
        workspace.populate(&placeholder_assets())?;

        let entries = archive::write_archive(
            workspace.path(),
            &self.config.output_path,
            self.config.compression,
        )?;

        workspace.remove()?;

        let total_size = entries.iter().map(|e| e.size).sum();
        info!(
            "Built placeholder archive {} ({} entries, {} bytes)",
            self.config.output_path.display(),
            entries.len(),
            total_size
        );

        Ok(BuildReport {
            output_path: self.config.output_path.clone(),
            entries,
            total_size,
        })
    }
}

/// Build the placeholder archive at `output_path` using the default workspace
pub fn build(output_path: &Path) -> Result<BuildReport> {
    build_in(output_path, Path::new(DEFAULT_WORKSPACE_DIR))
}

/// Build the placeholder archive at `output_path`, staging in `workspace_dir`
pub fn build_in(output_path: &Path, workspace_dir: &Path) -> Result<BuildReport> {
    ApkBuilder::new(BuildConfig {
        output_path: output_path.to_path_buf(),
        workspace_dir: workspace_dir.to_path_buf(),
        compression: Compression::default(),
    })
    .build()
}

/// Print the confirmation lines for a finished build
pub fn print_build_summary(report: &BuildReport) {
    println!("演示APK文件已创建: {}", report.output_path.display());
    println!("注意：这不是真正的APK文件，仅用于演示下载功能。");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::EXPECTED_ENTRIES;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> BuildConfig {
        BuildConfig {
            output_path: dir.join("apk/report-system-app.apk"),
            workspace_dir: dir.join(DEFAULT_WORKSPACE_DIR),
            compression: Compression::Deflated,
        }
    }

    #[test]
    fn test_default_config() {
        let config = BuildConfig::default();
        assert_eq!(config.output_path, PathBuf::from("apk/report-system-app.apk"));
        assert_eq!(config.workspace_dir, PathBuf::from("temp_demo_apk"));
        assert_eq!(config.compression, Compression::Deflated);
    }

    #[test]
    fn test_build_produces_four_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("apk")).unwrap();
        let config = config_in(temp_dir.path());

        let report = ApkBuilder::new(config.clone()).build().unwrap();

        let mut names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort();
        let mut expected = EXPECTED_ENTRIES.to_vec();
        expected.sort();
        assert_eq!(names, expected);

        let assets_size: u64 = placeholder_assets().iter().map(|a| a.size()).sum();
        assert_eq!(report.total_size, assets_size);
        assert!(config.output_path.is_file());
        assert!(!config.workspace_dir.exists());
    }

    #[test]
    fn test_build_in() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("demo.apk");
        let workspace = temp_dir.path().join(DEFAULT_WORKSPACE_DIR);

        let report = build_in(&output, &workspace).unwrap();
        assert_eq!(report.output_path, output);
        assert_eq!(report.entries.len(), 4);
        assert!(output.is_file());
        assert!(!workspace.exists());
    }

    #[test]
    fn test_output_inside_workspace_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = BuildConfig {
            output_path: temp_dir.path().join("temp_demo_apk/app.apk"),
            workspace_dir: temp_dir.path().join("temp_demo_apk"),
            compression: Compression::Deflated,
        };

        let err = ApkBuilder::new(config.clone()).build().unwrap_err();
        assert!(matches!(err, Error::OutputInsideWorkspace { .. }));
        assert!(!config.workspace_dir.exists());
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_output_inside_workspace_through_dot_dot() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("apk")).unwrap();
        let config = BuildConfig {
            output_path: temp_dir.path().join("apk/../ws/app.apk"),
            workspace_dir: temp_dir.path().join("ws"),
            compression: Compression::Deflated,
        };

        assert!(matches!(
            config.validate(),
            Err(Error::OutputInsideWorkspace { .. })
        ));
    }

    #[test]
    fn test_sibling_output_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        config.validate().unwrap();
    }

    #[test]
    fn test_foreign_workspace_is_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("apk")).unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("important.txt"), b"keep me").unwrap();

        let config = BuildConfig {
            workspace_dir: docs.clone(),
            ..config_in(temp_dir.path())
        };
        let err = ApkBuilder::new(config.clone()).build().unwrap_err();

        assert!(matches!(err, Error::WorkspaceNotEmpty(..)));
        assert_eq!(fs::read(docs.join("important.txt")).unwrap(), b"keep me");
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_build_missing_parent_cleans_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());

        assert!(ApkBuilder::new(config.clone()).build().is_err());
        assert!(!config.output_path.exists());
        assert!(!config.workspace_dir.exists());
    }
}
