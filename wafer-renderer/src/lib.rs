//! # wafer-renderer
//!
//! Tera-based engine that renders the wafer local manifests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wafer_core::ManifestConfig;
//! use wafer_renderer::{ManifestKind, Renderer};
//!
//! fn render_all(config: &ManifestConfig) {
//!     if let Ok(renderer) = Renderer::new() {
//!         for kind in ManifestKind::all() {
//!             if let Ok(xml) = renderer.render(*kind, config) {
//!                 println!("{}: {} bytes", kind.file_name(), xml.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::ManifestContext;
pub use engine::{ManifestKind, Renderer, TemplateEngine};
pub use error::RenderError;
