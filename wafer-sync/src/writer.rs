//! Manifest writer.
//!
//! Every document is rendered before the first write. Each file is then
//! truncated and rewritten in place; the output directory is never created.
//! The writes are not atomic as a pair, so a failure on the second file
//! leaves the first one updated.

use std::path::{Path, PathBuf};

use wafer_core::ManifestConfig;
use wafer_renderer::Renderer;

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// write_manifest
// ---------------------------------------------------------------------------

pub(crate) fn write_manifest(path: &Path, content: &str) -> Result<(), SyncError> {
    std::fs::write(path, content).map_err(|e| io_err(path, e))?;
    tracing::info!("wrote: {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

/// Render both local manifests and write them into `output_dir`.
///
/// Returns the written paths, in write order.
pub fn generate(output_dir: &Path, config: &ManifestConfig) -> Result<Vec<PathBuf>, SyncError> {
    let renderer = Renderer::new()?;
    let documents = renderer.render_all(config)?;
    tracing::debug!(
        "rendered {} manifests for revision {}",
        documents.len(),
        config.revision
    );

    let mut written = Vec::with_capacity(documents.len());
    for (kind, content) in documents {
        let path = kind.output_path(output_dir);
        write_manifest(&path, &content)?;
        written.push(path);
    }
    Ok(written)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
