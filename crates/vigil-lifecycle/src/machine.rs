//! # Draft Lifecycle State Machine
//!
//! One draft's journey per jurisdiction:
//!
//! ```text
//! NONE ──push (draft)──▶ PENDING_DRAFT ──approve──▶ APPROVED
//!   ▲                          │                        │
//!   │                          │ clear / switch         │ push (new draft)
//!   └──────────────────────────┴────────────────────────┘
//! ```
//!
//! A push whose response carries no draft identifier was applied
//! immediately by the backend and lands directly in `APPROVED`. Every
//! transition is appended to a log with a timestamp and a note, so the
//! console can show how the current state was reached.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::Timestamp;

/// The observable lifecycle phase of the current draft slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DraftPhase {
    /// No push result is live.
    #[default]
    None,
    /// A push produced a draft awaiting review.
    PendingDraft,
    /// The current push result's rulebook is active (approved or applied
    /// immediately).
    Approved,
}

impl DraftPhase {
    /// Canonical phase name for logs and rendering.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::PendingDraft => "PENDING_DRAFT",
            Self::Approved => "APPROVED",
        }
    }
}

impl std::fmt::Display for DraftPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Review status derived from the push response and advanced by approval.
///
/// Distinct from [`DraftPhase`]: the phase tracks whether a result is
/// live at all; the status tracks where that result is in review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Awaiting review (`status: "pending_review"` on the push response).
    #[default]
    Pending,
    /// Approved, or applied immediately without review.
    Approved,
}

/// One entry in the lifecycle's transition log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Phase before the transition.
    pub from: DraftPhase,
    /// Phase after the transition.
    pub to: DraftPhase,
    /// When the transition occurred.
    pub at: Timestamp,
    /// What caused it (e.g. `"push REG-7"`).
    pub note: String,
}

/// A transition was requested that the current phase does not permit.
#[derive(Debug, Error)]
#[error("invalid draft transition from {from} to {to}: {reason}")]
pub struct TransitionError {
    /// The phase the machine was in.
    pub from: DraftPhase,
    /// The phase requested.
    pub to: DraftPhase,
    /// Why the transition was rejected.
    pub reason: String,
}

/// The per-jurisdiction draft lifecycle: current phase, review status, and
/// the append-only transition log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftLifecycle {
    phase: DraftPhase,
    status: DraftStatus,
    log: Vec<TransitionRecord>,
}

impl DraftLifecycle {
    /// A fresh lifecycle in `NONE`/`Pending`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// The current review status.
    pub fn status(&self) -> DraftStatus {
        self.status
    }

    /// The transition log, oldest first.
    pub fn log(&self) -> &[TransitionRecord] {
        &self.log
    }

    /// A successful push produced a reviewable draft. Valid from any
    /// phase: a new push always supersedes whatever was live.
    pub fn begin_pending(&mut self, note: impl Into<String>) {
        self.record(DraftPhase::PendingDraft, note);
        self.status = DraftStatus::Pending;
    }

    /// A successful push was applied immediately (no draft identifier).
    pub fn mark_applied(&mut self, note: impl Into<String>) {
        self.record(DraftPhase::Approved, note);
        self.status = DraftStatus::Approved;
    }

    /// A pending draft was approved.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the phase is `PENDING_DRAFT`.
    pub fn approve(&mut self, note: impl Into<String>) -> Result<(), TransitionError> {
        if self.phase != DraftPhase::PendingDraft {
            return Err(TransitionError {
                from: self.phase,
                to: DraftPhase::Approved,
                reason: "only a pending draft can be approved".to_string(),
            });
        }
        self.record(DraftPhase::Approved, note);
        self.status = DraftStatus::Approved;
        Ok(())
    }

    /// Retire the current result: back to `NONE`/`Pending`. Valid from any
    /// phase; a reset from `NONE` is a no-op and is not logged.
    pub fn reset(&mut self, note: impl Into<String>) {
        if self.phase == DraftPhase::None {
            return;
        }
        self.record(DraftPhase::None, note);
        self.status = DraftStatus::Pending;
    }

    fn record(&mut self, to: DraftPhase, note: impl Into<String>) {
        self.log.push(TransitionRecord {
            from: self.phase,
            to,
            at: Timestamp::now(),
            note: note.into(),
        });
        self.phase = to;
    }
}
