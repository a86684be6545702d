//! Environment-driven entrypoint used by the CLI.

use std::path::{Path, PathBuf};

use wafer_core::ManifestConfig;

use crate::{generate, SyncError};

/// Resolve the revision from the environment, then generate.
///
/// A missing revision variable fails here, before any file is opened.
pub fn run(output_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    let config = ManifestConfig::from_env()?;
    tracing::debug!("resolved revision {}", config.revision);
    generate(output_dir, &config)
}
