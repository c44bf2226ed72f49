//! Property tests for draft-edit isolation.
//!
//! Random edit sequences, valid or not, must never reach back into the
//! proposal the draft was seeded from, and the revision counter must
//! count exactly the edits that applied.

use proptest::prelude::*;

use vigil_core::{DraftId, JurisdictionCode};
use vigil_rulebook::{
    DraftEdit, DraftRulebook, RiskScoring, RuleCategory, RuleEntry, Rulebook, RulebookVersion,
};

fn proposal() -> Rulebook {
    Rulebook {
        amount_based: vec![
            "Flag transactions above 10,000 USD".to_string(),
            "Flag structuring below reporting thresholds".to_string(),
        ],
        frequency_based: vec!["Flag more than 10 tx/hour".to_string()],
        location_based: vec!["Flag sanctioned countries".to_string()],
        behavioural_pattern: vec!["Flag dormancy breaks".to_string()],
        risk_score: RiskScoring {
            range: "0-100".to_string(),
            rules: vec![
                RuleEntry {
                    category: "Amount".to_string(),
                    rule: "Above threshold".to_string(),
                    points: 30,
                },
                RuleEntry {
                    category: "Location".to_string(),
                    rule: "Sanctioned country".to_string(),
                    points: 50,
                },
            ],
            capping: "Capped at 100".to_string(),
        },
        risk_bands: std::collections::BTreeMap::from([
            ("HIGH".to_string(), "70-100".to_string()),
            ("MEDIUM".to_string(), "40-69".to_string()),
            ("CLEAN".to_string(), "0-9".to_string()),
        ]),
    }
}

fn seeded_draft() -> DraftRulebook {
    DraftRulebook::seeded(
        DraftId::new("d1").unwrap(),
        JurisdictionCode::Ae,
        "v4".parse::<RulebookVersion>().unwrap(),
        &proposal(),
    )
}

fn arb_section() -> impl Strategy<Value = RuleCategory> {
    prop_oneof![
        Just(RuleCategory::AmountBased),
        Just(RuleCategory::FrequencyBased),
        Just(RuleCategory::LocationBased),
        Just(RuleCategory::BehaviouralPattern),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-z ]{1,24}"
}

fn arb_band() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("HIGH".to_string()),
        Just("MEDIUM".to_string()),
        Just("CLEAN".to_string()),
        Just("WATCH".to_string()),
    ]
}

fn arb_row() -> impl Strategy<Value = RuleEntry> {
    (arb_text(), arb_text(), -50i64..100).prop_map(|(category, rule, points)| RuleEntry {
        category,
        rule,
        points,
    })
}

// Indexes range past the fixture sizes so sequences mix valid and
// out-of-bounds edits.
fn arb_edit() -> impl Strategy<Value = DraftEdit> {
    prop_oneof![
        (arb_section(), 0usize..4, arb_text())
            .prop_map(|(section, index, text)| DraftEdit::ReplaceRule { section, index, text }),
        (arb_section(), arb_text())
            .prop_map(|(section, text)| DraftEdit::AppendRule { section, text }),
        (arb_section(), 0usize..4)
            .prop_map(|(section, index)| DraftEdit::RemoveRule { section, index }),
        (0usize..4, arb_row())
            .prop_map(|(index, row)| DraftEdit::ReplaceScoringRow { index, row }),
        arb_row().prop_map(|row| DraftEdit::AppendScoringRow { row }),
        (0usize..4).prop_map(|index| DraftEdit::RemoveScoringRow { index }),
        arb_text().prop_map(|range| DraftEdit::SetScoringRange { range }),
        arb_text().prop_map(|capping| DraftEdit::SetScoringCapping { capping }),
        (arb_band(), arb_text())
            .prop_map(|(band, description)| DraftEdit::SetBandDescription { band, description }),
        arb_band().prop_map(|band| DraftEdit::RemoveBand { band }),
    ]
}

proptest! {
    #[test]
    fn edit_sequences_never_touch_the_seeded_proposal(
        edits in prop::collection::vec(arb_edit(), 0..32)
    ) {
        let original = proposal();
        let mut draft = seeded_draft();
        let mut applied = 0u32;

        for edit in &edits {
            match draft.apply(edit) {
                Ok(next) => {
                    prop_assert_eq!(next.revision, applied + 1);
                    draft = next;
                    applied += 1;
                }
                Err(_) => {
                    // A rejected edit leaves the draft at its prior revision.
                    prop_assert_eq!(draft.revision, applied);
                }
            }
        }

        prop_assert_eq!(&original, &proposal(), "proposal fixture is stable");
        prop_assert_eq!(draft.revision, applied);
        prop_assert_eq!(draft.draft_id.as_str(), "d1");
    }

    #[test]
    fn apply_never_mutates_its_receiver(edit in arb_edit()) {
        let draft = seeded_draft();
        let before = draft.clone();
        let _ = draft.apply(&edit);
        prop_assert_eq!(draft, before);
    }

    #[test]
    fn edit_scripts_roundtrip_through_json(
        edits in prop::collection::vec(arb_edit(), 1..8)
    ) {
        let json = serde_json::to_string(&edits).unwrap();
        let back: Vec<DraftEdit> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, edits);
    }
}

/// The isolation property end to end: edits on a seeded draft leave the
/// push proposal byte-identical.
#[test]
fn edited_draft_leaves_the_proposal_snapshot_equal() {
    let pushed = proposal();
    let snapshot = pushed.clone();

    let draft = seeded_draft();
    let draft = draft
        .apply(&DraftEdit::AppendRule {
            section: RuleCategory::AmountBased,
            text: "Flag cash deposits above 3,000 USD".to_string(),
        })
        .unwrap();
    let draft = draft
        .apply(&DraftEdit::RemoveBand {
            band: "MEDIUM".to_string(),
        })
        .unwrap();

    assert_eq!(pushed, snapshot);
    assert_ne!(draft.rulebook, pushed);
    assert_eq!(draft.revision, 2);
}
