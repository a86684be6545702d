//! Template context — the values substituted into one local manifest.

use serde::Serialize;

use wafer_core::types::{ProjectOverride, Remote};

use crate::error::RenderError;

/// Rendering payload for `local_manifest.xml.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestContext {
    pub remote: Remote,
    pub project: ProjectOverride,
}

impl ManifestContext {
    pub fn new(remote: Remote, project: ProjectOverride) -> Self {
        ManifestContext { remote, project }
    }

    /// Convert into a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        let value = serde_json::to_value(self)?;
        Ok(tera::Context::from_value(value)?)
    }
}
