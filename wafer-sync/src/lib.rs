//! # wafer-sync
//!
//! Writes rendered local manifests into an output directory.
//!
//! Call [`generate`] with an explicit [`ManifestConfig`](wafer_core::ManifestConfig),
//! or [`pipeline::run`] to resolve the revision from the environment first.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::SyncError;
pub use writer::generate;
