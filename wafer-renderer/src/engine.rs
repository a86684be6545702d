//! Tera rendering engine — [`ManifestKind`] enum and [`Renderer`].
//!
//! # Output files
//!
//! | Manifest        | File name                   | Revision               |
//! |-----------------|-----------------------------|------------------------|
//! | SystemCore      | `wafer_system_core.xml`     | literal `wafer`        |
//! | FrameworksBase  | `wafer_frameworks_base.xml` | `$PRIMITIVE_GIT_SHA`   |

use std::path::{Path, PathBuf};

use tera::Tera;

use wafer_core::{
    types::{ProjectOverride, Remote, RemoteName, Revision, WAFER},
    ManifestConfig,
};

use crate::context::ManifestContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const LOCAL_MANIFEST_TPL: &str = "manifests/local_manifest.xml.tera";

const TPLS: &[(&str, &str)] = &[(
    LOCAL_MANIFEST_TPL,
    include_str!("templates/local_manifest.xml.tera"),
)];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    // Values land in XML attributes as-is; no entity escaping.
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(TPLS.iter().copied())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// ManifestKind
// ---------------------------------------------------------------------------

/// The local manifests this tool generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    SystemCore,
    FrameworksBase,
}

impl ManifestKind {
    /// All manifests in write order.
    pub fn all() -> &'static [ManifestKind] {
        &[ManifestKind::SystemCore, ManifestKind::FrameworksBase]
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::SystemCore => "wafer_system_core.xml",
            ManifestKind::FrameworksBase => "wafer_frameworks_base.xml",
        }
    }

    /// Target path inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }

    /// The remove/add pair this manifest carries.
    ///
    /// Only `FrameworksBase` takes its revision from `config`.
    pub fn project_override(&self, config: &ManifestConfig) -> ProjectOverride {
        let (remove, path, name, revision) = match self {
            ManifestKind::SystemCore => (
                "platform/system/core",
                "system/core",
                "platform_system_core",
                Revision::from(WAFER),
            ),
            ManifestKind::FrameworksBase => (
                "platform/frameworks/base",
                "frameworks/base",
                "platform_frameworks_base",
                config.revision.clone(),
            ),
        };
        ProjectOverride {
            remove: remove.to_string(),
            path: path.to_string(),
            name: name.to_string(),
            remote: RemoteName::from(WAFER),
            revision,
        }
    }

    pub fn context(&self, config: &ManifestConfig) -> ManifestContext {
        ManifestContext::new(Remote::wafer(), self.project_override(config))
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera engine holding the embedded local-manifest template.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, RenderError> {
        Ok(TemplateEngine { tera: build_tera()? })
    }

    /// Render one manifest document from `ctx`.
    ///
    /// Surrounding whitespace is stripped; substituted values are untouched.
    pub fn render(&self, ctx: &ManifestContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let rendered = self.tera.render(LOCAL_MANIFEST_TPL, &tera_ctx)?;
        Ok(rendered.trim().to_string())
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renderer for every [`ManifestKind`]. Create once with [`Renderer::new`]
/// and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new()?,
        })
    }

    /// Render the document for `kind`.
    pub fn render(&self, kind: ManifestKind, config: &ManifestConfig) -> Result<String, RenderError> {
        self.engine.render(&kind.context(config))
    }

    /// Render every manifest, in write order, before anything touches disk.
    pub fn render_all(
        &self,
        config: &ManifestConfig,
    ) -> Result<Vec<(ManifestKind, String)>, RenderError> {
        let mut results = Vec::with_capacity(ManifestKind::all().len());
        for kind in ManifestKind::all() {
            results.push((*kind, self.render(*kind, config)?));
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
