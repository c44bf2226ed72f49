//! Rulebook version labels.
//!
//! The backend versions each jurisdiction's rulebook with a `"v<n>"` label
//! and bumps the number on every push (`v3` → `v4`). The label is parsed
//! into its number so versions order correctly (`v10` > `v9`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rulebook version label (`"v1"`, `"v2"`, ...).
///
/// Serializes to the wire label; ordering is numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RulebookVersion(u32);

/// Errors parsing a version label.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The label is not of the form `v<n>`.
    #[error("invalid rulebook version label: \"{0}\" (expected v<n>)")]
    Malformed(String),
}

impl RulebookVersion {
    /// Construct from a raw version number.
    pub fn from_number(n: u32) -> Self {
        Self(n)
    }

    /// The numeric part of the label.
    pub fn number(&self) -> u32 {
        self.0
    }

    /// The next version, matching the backend's bump on push.
    pub fn bump(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::str::FromStr for RulebookVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('v')
            .or_else(|| s.strip_prefix('V'))
            .ok_or_else(|| VersionError::Malformed(s.to_string()))?;
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| VersionError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for RulebookVersion {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RulebookVersion> for String {
    fn from(v: RulebookVersion) -> Self {
        v.to_string()
    }
}

impl std::fmt::Display for RulebookVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
