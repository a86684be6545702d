//! Error types for wafer-core.

use thiserror::Error;

/// Errors raised while resolving generator inputs from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The required variable is not set.
    #[error("environment variable {var} is not set")]
    MissingEnv { var: &'static str },

    /// The variable is set but does not hold valid Unicode.
    #[error("environment variable {var} is not valid unicode")]
    NotUnicode { var: &'static str },
}
