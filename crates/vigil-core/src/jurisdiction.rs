//! # Jurisdiction Codes
//!
//! The monitored jurisdictions are a closed set: Malta, the UAE, and the
//! Cayman Islands. Each has its own rulebook version and regulation feed
//! on the backend, addressed by a two-letter code.
//!
//! The set is an enum rather than a validated string so that a typo'd
//! code is unrepresentable and every `match` on jurisdictions is
//! exhaustive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A monitored regulatory jurisdiction.
///
/// Serializes to the two-letter wire code (`"MT"`, `"AE"`, `"KY"`) used in
/// API paths and payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JurisdictionCode {
    /// Malta.
    #[serde(rename = "MT")]
    Mt,
    /// United Arab Emirates.
    #[serde(rename = "AE")]
    Ae,
    /// Cayman Islands.
    #[serde(rename = "KY")]
    Ky,
}

impl JurisdictionCode {
    /// The two-letter wire code, as used in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mt => "MT",
            Self::Ae => "AE",
            Self::Ky => "KY",
        }
    }

    /// The human-readable jurisdiction name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mt => "Malta",
            Self::Ae => "UAE",
            Self::Ky => "Cayman Islands",
        }
    }

    /// All monitored jurisdictions, in display order.
    pub fn all() -> &'static [JurisdictionCode] {
        &[Self::Mt, Self::Ae, Self::Ky]
    }
}

impl FromStr for JurisdictionCode {
    type Err = ValidationError;

    /// Parse a jurisdiction code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MT" => Ok(Self::Mt),
            "AE" => Ok(Self::Ae),
            "KY" => Ok(Self::Ky),
            other => Err(ValidationError::UnknownJurisdiction(other.to_string())),
        }
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
