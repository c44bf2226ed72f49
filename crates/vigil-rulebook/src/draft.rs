//! # Editable Rulebook Drafts
//!
//! When a push produces a rulebook proposal awaiting review, the console
//! seeds a [`DraftRulebook`]: a deep, independently-owned copy of the
//! proposal that the operator edits locally before approval.
//!
//! Editing is modeled as a pure function: [`DraftRulebook::apply`] takes an
//! edit and returns a *new* draft value with the revision counter bumped.
//! The receiver is never mutated, and the push result the draft was seeded
//! from cannot be reached through it — equality with a saved snapshot of
//! the original proposal holds no matter how many edits are applied.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::{DraftId, JurisdictionCode};

use crate::model::{RuleCategory, RuleEntry, Rulebook};
use crate::version::RulebookVersion;

/// A single local edit to a draft rulebook.
///
/// Serializable so the CLI can apply a JSON edit script; the `op` tag
/// selects the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DraftEdit {
    /// Replace the rule text at `index` in one category list.
    ReplaceRule {
        /// The category list to edit.
        section: RuleCategory,
        /// Position within the list.
        index: usize,
        /// The new rule text.
        text: String,
    },
    /// Append a rule to one category list.
    AppendRule {
        /// The category list to edit.
        section: RuleCategory,
        /// The rule text to append.
        text: String,
    },
    /// Remove the rule at `index` from one category list.
    RemoveRule {
        /// The category list to edit.
        section: RuleCategory,
        /// Position within the list.
        index: usize,
    },
    /// Replace a scoring-table row.
    ReplaceScoringRow {
        /// Position within the scoring table.
        index: usize,
        /// The replacement row.
        row: RuleEntry,
    },
    /// Append a scoring-table row.
    AppendScoringRow {
        /// The row to append.
        row: RuleEntry,
    },
    /// Remove a scoring-table row.
    RemoveScoringRow {
        /// Position within the scoring table.
        index: usize,
    },
    /// Replace the scoring range description.
    SetScoringRange {
        /// The new range description.
        range: String,
    },
    /// Replace the scoring capping policy.
    SetScoringCapping {
        /// The new capping description.
        capping: String,
    },
    /// Set (insert or replace) a band description.
    SetBandDescription {
        /// The band name (e.g. `"HIGH"`).
        band: String,
        /// The new description.
        description: String,
    },
    /// Remove a band description.
    RemoveBand {
        /// The band name to remove.
        band: String,
    },
}

/// Errors applying a [`DraftEdit`].
#[derive(Debug, Error)]
pub enum DraftEditError {
    /// A rule index was outside its category list.
    #[error("rule index {index} out of bounds for {section} (len {len})")]
    RuleIndexOutOfBounds {
        /// The category list addressed.
        section: RuleCategory,
        /// The index requested.
        index: usize,
        /// The list's length at the time.
        len: usize,
    },

    /// A scoring-table index was out of bounds.
    #[error("scoring row index {index} out of bounds (len {len})")]
    ScoringIndexOutOfBounds {
        /// The index requested.
        index: usize,
        /// The table's length at the time.
        len: usize,
    },

    /// A band removal named a band not present in the map.
    #[error("unknown risk band: \"{band}\"")]
    UnknownBand {
        /// The band name requested.
        band: String,
    },
}

/// An independently-owned, locally-editable copy of a proposed rulebook.
///
/// Constructed exactly once per pending draft by [`DraftRulebook::seeded`],
/// which deep-copies the proposal. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRulebook {
    /// The backend-assigned draft identifier.
    pub draft_id: DraftId,
    /// The jurisdiction the draft belongs to.
    pub jurisdiction: JurisdictionCode,
    /// The version the draft would become on approval.
    pub proposed_version: RulebookVersion,
    /// The editable rulebook content.
    pub rulebook: Rulebook,
    /// Number of edits applied since seeding.
    pub revision: u32,
}

impl DraftRulebook {
    /// Seed a draft from a proposed rulebook, taking a deep copy.
    ///
    /// The returned draft shares no storage with `proposal`; later edits
    /// cannot reach the original.
    pub fn seeded(
        draft_id: DraftId,
        jurisdiction: JurisdictionCode,
        proposed_version: RulebookVersion,
        proposal: &Rulebook,
    ) -> Self {
        Self {
            draft_id,
            jurisdiction,
            proposed_version,
            rulebook: proposal.clone(),
            revision: 0,
        }
    }

    /// Apply one edit, returning a new draft with `revision + 1`.
    ///
    /// Pure: `self` is unchanged whether the edit succeeds or fails.
    ///
    /// # Errors
    ///
    /// Returns [`DraftEditError`] for out-of-bounds indices or unknown
    /// bands; no partial edit is ever produced.
    pub fn apply(&self, edit: &DraftEdit) -> Result<DraftRulebook, DraftEditError> {
        let mut next = self.clone();
        next.apply_in_place(edit)?;
        next.revision = self.revision + 1;
        Ok(next)
    }

    fn apply_in_place(&mut self, edit: &DraftEdit) -> Result<(), DraftEditError> {
        let rb = &mut self.rulebook;
        match edit {
            DraftEdit::ReplaceRule { section, index, text } => {
                let rules = rb.rules_mut(*section);
                let len = rules.len();
                let slot = rules.get_mut(*index).ok_or(
                    DraftEditError::RuleIndexOutOfBounds {
                        section: *section,
                        index: *index,
                        len,
                    },
                )?;
                *slot = text.clone();
                Ok(())
            }
            DraftEdit::AppendRule { section, text } => {
                rb.rules_mut(*section).push(text.clone());
                Ok(())
            }
            DraftEdit::RemoveRule { section, index } => {
                let rules = rb.rules_mut(*section);
                if *index >= rules.len() {
                    return Err(DraftEditError::RuleIndexOutOfBounds {
                        section: *section,
                        index: *index,
                        len: rules.len(),
                    });
                }
                rules.remove(*index);
                Ok(())
            }
            DraftEdit::ReplaceScoringRow { index, row } => {
                let len = rb.risk_score.rules.len();
                let slot = rb
                    .risk_score
                    .rules
                    .get_mut(*index)
                    .ok_or(DraftEditError::ScoringIndexOutOfBounds { index: *index, len })?;
                *slot = row.clone();
                Ok(())
            }
            DraftEdit::AppendScoringRow { row } => {
                rb.risk_score.rules.push(row.clone());
                Ok(())
            }
            DraftEdit::RemoveScoringRow { index } => {
                let len = rb.risk_score.rules.len();
                if *index >= len {
                    return Err(DraftEditError::ScoringIndexOutOfBounds { index: *index, len });
                }
                rb.risk_score.rules.remove(*index);
                Ok(())
            }
            DraftEdit::SetScoringRange { range } => {
                rb.risk_score.range = range.clone();
                Ok(())
            }
            DraftEdit::SetScoringCapping { capping } => {
                rb.risk_score.capping = capping.clone();
                Ok(())
            }
            DraftEdit::SetBandDescription { band, description } => {
                rb.risk_bands.insert(band.clone(), description.clone());
                Ok(())
            }
            DraftEdit::RemoveBand { band } => {
                if rb.risk_bands.remove(band).is_none() {
                    return Err(DraftEditError::UnknownBand { band: band.clone() });
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskScoring;
    use std::collections::BTreeMap;

    fn sample_rulebook() -> Rulebook {
        Rulebook {
            amount_based: vec!["A0".to_string(), "A1".to_string()],
            frequency_based: vec!["F0".to_string()],
            location_based: vec!["L0".to_string()],
            behavioural_pattern: vec!["B0".to_string()],
            risk_score: RiskScoring {
                range: "0-100".to_string(),
                rules: vec![RuleEntry {
                    category: "Amount".to_string(),
                    rule: "A0".to_string(),
                    points: 30,
                }],
                capping: "cap 100".to_string(),
            },
            risk_bands: BTreeMap::from([("HIGH".to_string(), "70-100".to_string())]),
        }
    }

    fn sample_draft() -> DraftRulebook {
        DraftRulebook::seeded(
            DraftId::new("d1").unwrap(),
            JurisdictionCode::Ae,
            "v4".parse().unwrap(),
            &sample_rulebook(),
        )
    }

    #[test]
    fn seeding_deep_copies_the_proposal() {
        let proposal = sample_rulebook();
        let draft = DraftRulebook::seeded(
            DraftId::new("d1").unwrap(),
            JurisdictionCode::Ae,
            "v4".parse().unwrap(),
            &proposal,
        );
        assert_eq!(draft.rulebook, proposal);
        assert_eq!(draft.revision, 0);
    }

    #[test]
    fn apply_returns_new_value_and_leaves_receiver_unchanged() {
        let draft = sample_draft();
        let snapshot = draft.clone();
        let edited = draft
            .apply(&DraftEdit::AppendRule {
                section: RuleCategory::AmountBased,
                text: "A2".to_string(),
            })
            .unwrap();
        assert_eq!(draft, snapshot);
        assert_eq!(edited.revision, 1);
        assert_eq!(edited.rulebook.amount_based.len(), 3);
    }

    #[test]
    fn replace_remove_and_band_edits() {
        let draft = sample_draft();
        let edited = draft
            .apply(&DraftEdit::ReplaceRule {
                section: RuleCategory::AmountBased,
                index: 1,
                text: "A1'".to_string(),
            })
            .unwrap()
            .apply(&DraftEdit::RemoveRule {
                section: RuleCategory::FrequencyBased,
                index: 0,
            })
            .unwrap()
            .apply(&DraftEdit::SetBandDescription {
                band: "CLEAN".to_string(),
                description: "0-9".to_string(),
            })
            .unwrap();
        assert_eq!(edited.rulebook.amount_based[1], "A1'");
        assert!(edited.rulebook.frequency_based.is_empty());
        assert_eq!(edited.rulebook.risk_bands["CLEAN"], "0-9");
        assert_eq!(edited.revision, 3);
    }

    #[test]
    fn scoring_table_edits() {
        let draft = sample_draft();
        let edited = draft
            .apply(&DraftEdit::AppendScoringRow {
                row: RuleEntry {
                    category: "Location".to_string(),
                    rule: "L0".to_string(),
                    points: 25,
                },
            })
            .unwrap()
            .apply(&DraftEdit::ReplaceScoringRow {
                index: 0,
                row: RuleEntry {
                    category: "Amount".to_string(),
                    rule: "A0".to_string(),
                    points: 40,
                },
            })
            .unwrap()
            .apply(&DraftEdit::SetScoringRange {
                range: "0-120".to_string(),
            })
            .unwrap();
        assert_eq!(edited.rulebook.risk_score.rules.len(), 2);
        assert_eq!(edited.rulebook.risk_score.rules[0].points, 40);
        assert_eq!(edited.rulebook.risk_score.range, "0-120");
    }

    #[test]
    fn out_of_bounds_edits_are_rejected_without_partial_state() {
        let draft = sample_draft();
        let snapshot = draft.clone();

        let err = draft
            .apply(&DraftEdit::ReplaceRule {
                section: RuleCategory::LocationBased,
                index: 5,
                text: "x".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DraftEditError::RuleIndexOutOfBounds { .. }));

        let err = draft
            .apply(&DraftEdit::RemoveScoringRow { index: 9 })
            .unwrap_err();
        assert!(matches!(err, DraftEditError::ScoringIndexOutOfBounds { .. }));

        let err = draft
            .apply(&DraftEdit::RemoveBand {
                band: "NOPE".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DraftEditError::UnknownBand { .. }));

        assert_eq!(draft, snapshot);
    }

    #[test]
    fn edit_script_deserializes_from_json() {
        let script = r#"[
            {"op": "append_rule", "section": "amount_based", "text": "A2"},
            {"op": "remove_rule", "section": "frequency_based", "index": 0},
            {"op": "set_band_description", "band": "LOW", "description": "10-39"}
        ]"#;
        let edits: Vec<DraftEdit> = serde_json::from_str(script).unwrap();
        assert_eq!(edits.len(), 3);
        let mut draft = sample_draft();
        for edit in &edits {
            draft = draft.apply(edit).unwrap();
        }
        assert_eq!(draft.revision, 3);
    }
}
