//! # Risk Classification Types
//!
//! Risk bands and profiles as assigned by the backend's anomaly pipeline.
//! The console never derives these — it renders what the server sends.

use serde::{Deserialize, Serialize};

/// The risk band assigned to an account by the latest analysis.
///
/// Wire form is SCREAMING case (`"HIGH"`, `"CLEAN"`, ...), matching the
/// backend's band names and the keys of the rulebook's band-description
/// map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    /// Flagged for immediate review.
    High,
    /// Elevated activity, watch-listed.
    Medium,
    /// Minor deviations from baseline.
    Low,
    /// No anomalies detected.
    Clean,
}

impl RiskBand {
    /// The wire/display name of the band.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Clean => "CLEAN",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An account's standing risk profile, distinct from the per-analysis
/// [`RiskBand`]. Wire form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    /// Routine activity.
    Low,
    /// Elevated baseline.
    Medium,
    /// Sustained high-risk behavior.
    High,
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_band_wire_form_is_screaming() {
        assert_eq!(serde_json::to_string(&RiskBand::High).unwrap(), "\"HIGH\"");
        let band: RiskBand = serde_json::from_str("\"CLEAN\"").unwrap();
        assert_eq!(band, RiskBand::Clean);
    }

    #[test]
    fn risk_profile_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&RiskProfile::Medium).unwrap(), "\"medium\"");
        let profile: RiskProfile = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(profile, RiskProfile::High);
    }
}
