//! wafer-manifests — write the wafer local manifests for `repo`.
//!
//! # Usage
//!
//! ```text
//! PRIMITIVE_GIT_SHA=<sha> wafer-manifests <path>
//! ```
//!
//! `RUST_LOG` controls log output on stderr (default `warn`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use wafer_sync::pipeline;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "wafer-manifests",
    about = "Generate manifests at a specific path.",
    long_about = None,
)]
struct Cli {
    /// The path to use for the manifests. Must already exist.
    path: PathBuf,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    tracing::debug!("output directory: {}", cli.path.display());

    let written = pipeline::run(&cli.path)
        .with_context(|| format!("failed to generate manifests in '{}'", cli.path.display()))?;

    println!("{} {} manifests", "✓".green(), written.len());
    for path in &written {
        println!("  ✎  {}", path.display());
    }
    Ok(())
}
