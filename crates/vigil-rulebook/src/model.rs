//! Rulebook and regulation wire shapes.
//!
//! These types match the backend JSON exactly. The rulebook's four rule
//! lists are plain strings (the backend's rule-synthesis agents emit
//! natural-language rules); structure lives in the scoring table and the
//! band map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vigil_core::RegulationId;

use crate::version::RulebookVersion;

/// One of the four rule-category lists in a rulebook.
///
/// Wire names match the rulebook's JSON field names, so an edit script can
/// address a section by the same name the payload uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Transaction-amount thresholds and structuring rules.
    AmountBased,
    /// Transaction-frequency and velocity rules.
    FrequencyBased,
    /// Geographic and geo-velocity rules.
    LocationBased,
    /// Behavioural-pattern rules.
    BehaviouralPattern,
}

impl RuleCategory {
    /// The JSON field name of this category in a [`Rulebook`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmountBased => "amount_based",
            Self::FrequencyBased => "frequency_based",
            Self::LocationBased => "location_based",
            Self::BehaviouralPattern => "behavioural_pattern",
        }
    }

    /// All four categories, in rulebook field order.
    pub fn all() -> &'static [RuleCategory] {
        &[
            Self::AmountBased,
            Self::FrequencyBased,
            Self::LocationBased,
            Self::BehaviouralPattern,
        ]
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A row in the points-based risk-scoring table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// The rule's category label (free text, e.g. `"Amount"`).
    pub category: String,
    /// The rule text the points apply to.
    pub rule: String,
    /// Points contributed when the rule fires.
    pub points: i64,
}

/// The points-based risk-scoring table of a rulebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScoring {
    /// The score range description (e.g. `"0-100"`).
    pub range: String,
    /// The scoring rows.
    pub rules: Vec<RuleEntry>,
    /// The capping policy description.
    pub capping: String,
}

/// A jurisdiction's structured rulebook: four rule-category lists, the
/// scoring table, and band descriptions keyed by band name.
///
/// `risk_bands` is a `BTreeMap` so serialization order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rulebook {
    /// Amount-based rules.
    pub amount_based: Vec<String>,
    /// Frequency-based rules.
    pub frequency_based: Vec<String>,
    /// Location-based rules.
    pub location_based: Vec<String>,
    /// Behavioural-pattern rules.
    pub behavioural_pattern: Vec<String>,
    /// The risk-scoring table.
    pub risk_score: RiskScoring,
    /// Band name → description (keys are band names such as `"HIGH"`).
    pub risk_bands: BTreeMap<String, String>,
}

impl Rulebook {
    /// The rule list for one category.
    pub fn rules(&self, category: RuleCategory) -> &[String] {
        match category {
            RuleCategory::AmountBased => &self.amount_based,
            RuleCategory::FrequencyBased => &self.frequency_based,
            RuleCategory::LocationBased => &self.location_based,
            RuleCategory::BehaviouralPattern => &self.behavioural_pattern,
        }
    }

    pub(crate) fn rules_mut(&mut self, category: RuleCategory) -> &mut Vec<String> {
        match category {
            RuleCategory::AmountBased => &mut self.amount_based,
            RuleCategory::FrequencyBased => &mut self.frequency_based,
            RuleCategory::LocationBased => &mut self.location_based,
            RuleCategory::BehaviouralPattern => &mut self.behavioural_pattern,
        }
    }

    /// Total rule count across the four category lists.
    pub fn rule_count(&self) -> usize {
        RuleCategory::all()
            .iter()
            .map(|c| self.rules(*c).len())
            .sum()
    }
}

/// A regulation record as the backend's regulation feed emits it — either
/// already incorporated into the rulebook or available for pushing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    /// The feed-assigned regulation identifier.
    pub regulation_update_id: RegulationId,
    /// Short title of the update.
    pub update_title: String,
    /// One-paragraph summary.
    pub summary: String,
    /// Effective date, as the feed formats it.
    pub date_effective: String,
}

/// The `GET /api/rules/{code}` response: the active rulebook alone,
/// without the regulation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesView {
    /// Human-readable jurisdiction name.
    pub jurisdiction: String,
    /// The active rulebook version label.
    pub current_version: RulebookVersion,
    /// The active rulebook.
    pub rulebook: Rulebook,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rulebook() -> Rulebook {
        Rulebook {
            amount_based: vec![
                "Flag transactions above 10,000 USD".to_string(),
                "Flag structuring below reporting thresholds".to_string(),
            ],
            frequency_based: vec!["Flag more than 10 transactions per hour".to_string()],
            location_based: vec!["Flag transactions from sanctioned countries".to_string()],
            behavioural_pattern: vec!["Flag dormant accounts resuming activity".to_string()],
            risk_score: RiskScoring {
                range: "0-100".to_string(),
                rules: vec![RuleEntry {
                    category: "Amount".to_string(),
                    rule: "Above threshold".to_string(),
                    points: 30,
                }],
                capping: "Score capped at 100".to_string(),
            },
            risk_bands: BTreeMap::from([
                ("HIGH".to_string(), "70-100: immediate review".to_string()),
                ("CLEAN".to_string(), "0-9: no action".to_string()),
            ]),
        }
    }

    #[test]
    fn category_accessor_matches_fields() {
        let rb = sample_rulebook();
        assert_eq!(rb.rules(RuleCategory::AmountBased).len(), 2);
        assert_eq!(rb.rules(RuleCategory::FrequencyBased).len(), 1);
        assert_eq!(rb.rule_count(), 5);
    }

    #[test]
    fn rulebook_roundtrips_through_json() {
        let rb = sample_rulebook();
        let json = serde_json::to_string(&rb).unwrap();
        let back: Rulebook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rb);
    }

    #[test]
    fn category_wire_names_match_json_fields() {
        let value = serde_json::to_value(sample_rulebook()).unwrap();
        for category in RuleCategory::all() {
            assert!(
                value.get(category.as_str()).is_some(),
                "missing field {category}"
            );
        }
    }
}
