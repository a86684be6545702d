//! Generator inputs resolved from the process environment.

use crate::error::ConfigError;
use crate::types::Revision;

/// Variable holding the frameworks/base revision.
pub const REVISION_ENV: &str = "PRIMITIVE_GIT_SHA";

/// Everything the generator reads from outside its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Revision pinned for `platform_frameworks_base`.
    pub revision: Revision,
}

impl ManifestConfig {
    pub fn new(revision: impl Into<Revision>) -> Self {
        ManifestConfig {
            revision: revision.into(),
        }
    }

    /// Resolve from the real process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Resolve through `lookup`, which behaves like [`std::env::var`].
    ///
    /// Any string, including the empty string, is accepted unvalidated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        match lookup(REVISION_ENV) {
            Ok(value) => Ok(Self::new(value)),
            Err(std::env::VarError::NotPresent) => {
                Err(ConfigError::MissingEnv { var: REVISION_ENV })
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(ConfigError::NotUnicode { var: REVISION_ENV })
            }
        }
    }
}
