// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use placeholder_apk::{BuildConfig, Compression, DEFAULT_WORKSPACE_DIR};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory laid out like a checkout: `apk/` exists, nothing else.
///
/// Keep the struct alive to prevent cleanup.
pub struct BuildEnv {
    pub temp_dir: TempDir,
}

impl BuildEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("apk")).unwrap();
        Self { temp_dir }
    }

    /// Like `new`, but without the `apk/` output directory
    pub fn without_output_dir() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("apk/report-system-app.apk")
    }

    pub fn workspace_dir(&self) -> PathBuf {
        self.temp_dir.path().join(DEFAULT_WORKSPACE_DIR)
    }

    pub fn config(&self) -> BuildConfig {
        BuildConfig {
            output_path: self.output_path(),
            workspace_dir: self.workspace_dir(),
            compression: Compression::Deflated,
        }
    }
}
