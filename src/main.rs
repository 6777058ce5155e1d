// src/main.rs

use anyhow::Result;
use clap::Parser;
use placeholder_apk::{DEFAULT_OUTPUT_PATH, DEFAULT_WORKSPACE_DIR};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => commands::cmd_build(DEFAULT_OUTPUT_PATH, DEFAULT_WORKSPACE_DIR, false),
        Some(Commands::Build {
            output,
            workdir,
            store,
        }) => commands::cmd_build(&output, &workdir, store),
        Some(Commands::Inspect { path, json }) => commands::cmd_inspect(&path, json),
    }
}
