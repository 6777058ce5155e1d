// src/cli.rs
//! CLI definitions for placeholder-apk
//!
//! Running with no subcommand builds the archive at the default paths.

use clap::{Parser, Subcommand};
use placeholder_apk::{DEFAULT_OUTPUT_PATH, DEFAULT_WORKSPACE_DIR};

#[derive(Parser)]
#[command(name = "placeholder-apk")]
#[command(author = "Report System Contributors")]
#[command(version)]
#[command(about = "Build a placeholder .apk archive for download-link testing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the placeholder archive (the default when no command is given)
    Build {
        /// Output archive path; its parent directory must already exist
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: String,

        /// Temporary workspace directory, removed after the build
        #[arg(short, long, default_value = DEFAULT_WORKSPACE_DIR)]
        workdir: String,

        /// Store entries without compression
        #[arg(long)]
        store: bool,
    },

    /// List the entries of a placeholder archive and check its layout
    Inspect {
        /// Path to the archive
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
