//! Shared record types carried between pipeline stages.
//!
//! Every record here has a closed field set: the struct definition is the
//! schema, so code cannot invent new fields, and `deny_unknown_fields`
//! extends the same guarantee to deserialized input by rejecting data whose
//! field names the type does not declare.

use serde::{Deserialize, Serialize};

/// Where a package (or its upgrade candidate) comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSource {
    /// Official binary repositories.
    Repo,
    /// The user package archive, built from source.
    Aur,
    /// Installed locally, no remote counterpart.
    Local,
}

/// One resolved install or upgrade action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallInfo {
    pub name: String,
    /// Installed version, when the package is already present.
    pub current_version: Option<String>,
    pub new_version: String,
    pub source: PackageSource,
}
