#![deny(missing_docs)]

//! # vigil-core — Foundational Types for the Vigil Compliance Console
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `thiserror`,
//! and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`RegulationId`] where a [`DraftId`]
//!    is expected.
//!
//! 2. **Single [`JurisdictionCode`] enum.** The monitored jurisdictions are
//!    a closed set. Exhaustive `match` everywhere — adding a jurisdiction
//!    forces every handler in the codebase to address it.
//!
//! 3. **[`ValidationError`] hierarchy.** Structured errors with `thiserror`
//!    — no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod identifier;
pub mod jurisdiction;
pub mod risk;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use identifier::{DraftId, RegulationId, UserId};
pub use jurisdiction::JurisdictionCode;
pub use risk::{RiskBand, RiskProfile};
pub use temporal::Timestamp;
