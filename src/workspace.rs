// src/workspace.rs
//! Transient staging directory for placeholder files
//!
//! The workspace lives at a fixed path relative to the current directory and
//! is removed once the archive has been written. If a build step fails before
//! that, dropping the [`Workspace`] still deletes the directory.
//!
//! An existing directory is only reused when everything in it is a leftover
//! placeholder file from an earlier run.

use crate::assets::{PlaceholderAsset, EXPECTED_ENTRIES};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Default workspace directory name
pub const DEFAULT_WORKSPACE_DIR: &str = "temp_demo_apk";

/// A staging directory owned by the running build
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    removed: bool,
}

impl Workspace {
    /// Create the workspace directory
    ///
    /// Succeeds if the directory already exists and only holds placeholder
    /// files; anything else is rejected before the directory is claimed.
    pub fn create(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if root.exists() {
            check_leftovers(&root)?;
        }
        fs::create_dir_all(&root)?;
        debug!("Created workspace at {}", root.display());
        Ok(Self {
            root,
            removed: false,
        })
    }

    /// Workspace root directory
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write every asset into the workspace, creating nested directories
    ///
    /// Returns the on-disk paths in the order the assets were given.
    pub fn populate(&self, assets: &[PlaceholderAsset]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(assets.len());

        for asset in assets {
            let path = asset
                .path
                .split('/')
                .fold(self.root.clone(), |acc, part| acc.join(part));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, asset.contents)?;
            debug!("Wrote {} ({} bytes)", asset.path, asset.size());
            written.push(path);
        }

        Ok(written)
    }

    /// Delete the workspace tree
    pub fn remove(mut self) -> Result<()> {
        self.removed = true;
        fs::remove_dir_all(&self.root)?;
        debug!("Removed workspace at {}", self.root.display());
        Ok(())
    }
}

/// Fail unless every path under `root` is a placeholder file or one of
/// their parent directories
fn check_leftovers(root: &Path) -> Result<()> {
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| Error::OutsideWorkspace(entry.path().to_path_buf()))?;
        let name: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let name = name.join("/");

        let known = if entry.file_type().is_dir() {
            EXPECTED_ENTRIES
                .iter()
                .any(|e| e.starts_with(&format!("{}/", name)))
        } else {
            entry.file_type().is_file() && EXPECTED_ENTRIES.contains(&name.as_str())
        };
        if !known {
            return Err(Error::WorkspaceNotEmpty(
                root.to_path_buf(),
                relative.to_path_buf(),
            ));
        }
    }
    Ok(())
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if self.removed || !self.root.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.root) {
            warn!(
                "Failed to clean up workspace {}: {}",
                self.root.display(),
                e
            );
        } else {
            debug!("Cleaned up abandoned workspace at {}", self.root.display());
        }
    }
}
