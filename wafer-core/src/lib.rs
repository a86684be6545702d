//! Wafer core library — manifest domain types, environment config, errors.
//!
//! - [`types`] — newtypes and the remote / project-override structs
//! - [`config`] — [`ManifestConfig`] resolved from the process environment
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{ManifestConfig, REVISION_ENV};
pub use error::ConfigError;
pub use types::{ProjectOverride, Remote, RemoteName, Revision};
