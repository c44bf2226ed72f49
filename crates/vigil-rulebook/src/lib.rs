//! # vigil-rulebook — Rulebook Model & Draft Editing
//!
//! The structured rulebook a jurisdiction enforces: four rule-category
//! lists (amount, frequency, location, behavioural pattern), a points-based
//! risk-scoring table, and a band-description map — plus the version label
//! arithmetic and the regulation records the backend feeds the console.
//!
//! The second half of this crate is [`DraftRulebook`]: an independently
//! owned copy of a proposed rulebook that the operator edits locally before
//! approval. Every edit is a pure function producing a new value; the
//! original proposal is never aliased or mutated.

pub mod draft;
pub mod model;
pub mod version;

pub use draft::{DraftEdit, DraftEditError, DraftRulebook};
pub use model::{Regulation, RiskScoring, RuleCategory, RuleEntry, Rulebook, RulesView};
pub use version::{RulebookVersion, VersionError};
