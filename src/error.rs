// src/error.rs
//! Error types for placeholder archive builds

use std::path::PathBuf;
use thiserror::Error;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while staging, archiving or inspecting
#[derive(Error, Debug)]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container could not be written or read
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal failed
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The output file's parent directory does not exist
    #[error("output directory does not exist: {}", .0.display())]
    OutputParentMissing(PathBuf),

    /// The workspace directory holds files that a previous build did not leave
    #[error("workspace {} contains files not written by this tool: {}", .0.display(), .1.display())]
    WorkspaceNotEmpty(PathBuf, PathBuf),

    /// The output archive would be written inside the workspace
    #[error("output {} is inside the workspace {}", .output.display(), .workspace.display())]
    OutputInsideWorkspace { output: PathBuf, workspace: PathBuf },

    /// A file was found outside the workspace root during archival
    #[error("path is not under the workspace: {}", .0.display())]
    OutsideWorkspace(PathBuf),

    /// Requested entry is not in the archive
    #[error("entry not found in archive: {0}")]
    EntryNotFound(String),

    /// PNG data failed a structural check
    #[error("invalid PNG: {0}")]
    Png(#[from] crate::png::PngError),
}
