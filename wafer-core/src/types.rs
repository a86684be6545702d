//! Domain types for local-manifest overrides.
//!
//! A local manifest tells `repo` to drop one upstream project and replace it
//! with a fork served from a named remote. Values are carried as plain strings
//! and inserted into the XML verbatim.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A commit, branch, or tag to check out for a project entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Revision(pub String);

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Revision {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Revision {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Name of a `<remote>` element, referenced by project entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RemoteName(pub String);

impl fmt::Display for RemoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RemoteName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RemoteName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Remote
// ---------------------------------------------------------------------------

/// Name shared by the fork remote and the pinned system/core revision.
pub const WAFER: &str = "wafer";

/// Fetch base for every forked project.
pub const WAFER_FETCH_URL: &str = "https://github.com/wafer-inc";

/// An upstream source declared with `<remote>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    pub name: RemoteName,
    pub fetch: String,
    pub review: String,
}

impl Remote {
    /// The `wafer` remote used by both generated manifests.
    pub fn wafer() -> Self {
        Remote {
            name: RemoteName::from(WAFER),
            fetch: WAFER_FETCH_URL.to_string(),
            review: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectOverride
// ---------------------------------------------------------------------------

/// A `<remove-project>` / `<project>` pair replacing an upstream project
/// with a fork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOverride {
    /// Upstream project name to remove, e.g. `platform/system/core`.
    pub remove: String,
    /// Checkout path inside the tree.
    pub path: String,
    /// Repository name on the remote.
    pub name: String,
    pub remote: RemoteName,
    pub revision: Revision,
}
