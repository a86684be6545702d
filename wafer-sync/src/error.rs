//! Error types for wafer-sync.

use std::path::PathBuf;

use thiserror::Error;

use wafer_core::ConfigError;
use wafer_renderer::RenderError;

/// All errors that can arise while generating manifests.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Required input missing from the environment.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
