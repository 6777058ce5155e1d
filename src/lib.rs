// src/lib.rs

//! Placeholder APK builder
//!
//! Packs a fixed set of placeholder files (landing page, web manifest, fake
//! signature manifest, 1x1 icon) into a ZIP archive named like an Android
//! package, so download links can be tested before a real build exists.
//!
//! # Build steps
//!
//! 1. Create the workspace directory
//! 2. Write the placeholder files into it
//! 3. Archive the workspace tree depth first
//! 4. Remove the workspace
//! 5. Report the output path

pub mod archive;
pub mod assets;
pub mod builder;
mod error;
pub mod hash;
pub mod inspector;
pub mod png;
pub mod workspace;

pub use archive::{ArchiveEntry, Compression};
pub use assets::{placeholder_assets, PlaceholderAsset, EXPECTED_ENTRIES, ICON_PNG};
pub use builder::{build, ApkBuilder, BuildConfig, BuildReport, DEFAULT_OUTPUT_PATH};
pub use error::{Error, Result};
pub use inspector::{IconStatus, InspectedApk};
pub use png::{inspect_png, PngError, PngSummary};
pub use workspace::{Workspace, DEFAULT_WORKSPACE_DIR};
