//! # The Compliance Console Controller
//!
//! [`ComplianceConsole`] owns the per-jurisdiction compliance state and
//! the live push-result/draft pair, and sequences the three network-backed
//! operations (load, push, approve) around them.
//!
//! ## Locking discipline
//!
//! State lives behind a `parking_lot::Mutex`. Every acquisition is short
//! and released before any `.await`; continuations re-acquire and then
//! re-validate that the world has not moved on (generation token still
//! current, originating jurisdiction still active) before writing.
//!
//! ## Failure discipline
//!
//! Network errors never escape: they are converted to a human-readable
//! message stored as the current error value, and the state is otherwise
//! left exactly as it was before the call. Precondition violations that a
//! well-behaved UI prevents (double push, approve during approve) are
//! typed [`ConsoleError`]s; approving with no draft present is a silent
//! no-op.

use parking_lot::Mutex;
use thiserror::Error;

use vigil_core::{JurisdictionCode, RegulationId};
use vigil_rulebook::{DraftEdit, DraftEditError, DraftRulebook};

use vigil_client::wire::JurisdictionCompliance;
use vigil_client::wire::PushResponse;

use crate::gateway::ComplianceGateway;
use crate::machine::{DraftLifecycle, DraftPhase, DraftStatus, TransitionRecord};
use crate::refetch::RefetchReason;

/// Precondition violations surfaced to the caller as typed errors.
///
/// These cannot occur through a well-behaved UI, which disables the
/// triggering controls while an operation is in flight.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A push is already in flight for the active jurisdiction.
    #[error("a push for {regulation} is already in flight")]
    PushInFlight {
        /// The regulation being processed.
        regulation: RegulationId,
    },

    /// An approval is already in flight.
    #[error("an approval is already in flight")]
    ApprovalInFlight,

    /// A draft edit was requested with no pending draft present.
    #[error("no pending draft to edit")]
    NoDraft,

    /// A draft edit failed (bad index, unknown band).
    #[error(transparent)]
    Edit(#[from] DraftEditError),
}

/// Internal mutable state. One instance per console, behind the mutex.
#[derive(Debug, Default)]
struct ConsoleState {
    active: Option<JurisdictionCode>,
    compliance: Option<JurisdictionCompliance>,
    loading: bool,
    error: Option<String>,
    /// The regulation currently being pushed, if any. Doubles as the
    /// single-flight guard and as the "disable only this list item" hint
    /// for presentation.
    pushing: Option<RegulationId>,
    approving: bool,
    push_result: Option<PushResponse>,
    draft: Option<DraftRulebook>,
    lifecycle: DraftLifecycle,
    /// Monotonic token for load requests; a load response is applied only
    /// if its captured generation is still current.
    load_generation: u64,
}

impl ConsoleState {
    /// Retire the live push-result/draft pair.
    fn retire_pair(&mut self, note: &str) {
        self.push_result = None;
        self.draft = None;
        self.lifecycle.reset(note);
    }
}

/// A read-only copy of the console's observable state, for presentation.
///
/// Presentation never holds the lock; it renders from snapshots and
/// dispatches intents back to the console.
#[derive(Debug, Clone)]
pub struct ConsoleSnapshot {
    /// The active jurisdiction, once one has been selected.
    pub active: Option<JurisdictionCode>,
    /// The last successfully fetched compliance state.
    pub compliance: Option<JurisdictionCompliance>,
    /// Whether a load is in flight.
    pub loading: bool,
    /// The current advisory error message, if any.
    pub error: Option<String>,
    /// The regulation currently being pushed, if any.
    pub pushing: Option<RegulationId>,
    /// Whether an approval is in flight.
    pub approving: bool,
    /// The live push result, if any.
    pub push_result: Option<PushResponse>,
    /// The live editable draft, if any.
    pub draft: Option<DraftRulebook>,
    /// Current lifecycle phase.
    pub phase: DraftPhase,
    /// Current review status.
    pub status: DraftStatus,
    /// The lifecycle transition log, oldest first.
    pub transitions: Vec<TransitionRecord>,
}

/// The compliance draft lifecycle controller.
pub struct ComplianceConsole<G> {
    gateway: G,
    state: Mutex<ConsoleState>,
}

impl<G: ComplianceGateway> ComplianceConsole<G> {
    /// Create a console over a gateway. No jurisdiction is active until
    /// [`select_jurisdiction`](Self::select_jurisdiction) is called.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: Mutex::new(ConsoleState::default()),
        }
    }

    /// Access the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// A read-only copy of the observable state.
    pub fn snapshot(&self) -> ConsoleSnapshot {
        let s = self.state.lock();
        ConsoleSnapshot {
            active: s.active,
            compliance: s.compliance.clone(),
            loading: s.loading,
            error: s.error.clone(),
            pushing: s.pushing.clone(),
            approving: s.approving,
            push_result: s.push_result.clone(),
            draft: s.draft.clone(),
            phase: s.lifecycle.phase(),
            status: s.lifecycle.status(),
            transitions: s.lifecycle.log().to_vec(),
        }
    }

    /// Make `code` the active jurisdiction and load its compliance state.
    ///
    /// Always retires the live push-result/draft pair first — drafts are
    /// scoped to the jurisdiction they were produced for, and local edits
    /// do not survive a switch.
    pub async fn select_jurisdiction(&self, code: JurisdictionCode) {
        {
            let mut s = self.state.lock();
            if s.active != Some(code) {
                tracing::info!(jurisdiction = %code, "selecting jurisdiction");
            }
            s.active = Some(code);
            s.retire_pair("jurisdiction selected");
        }
        self.load_jurisdiction(code, RefetchReason::User).await;
    }

    /// Fetch the compliance state for `code`.
    ///
    /// For [`RefetchReason::User`] the live push-result pair is cleared
    /// before the fetch begins; post-push/post-approve reconciliation
    /// loads preserve it. A response is applied only if no newer load has
    /// been issued and `code` is still the active jurisdiction; stale
    /// responses are discarded. On failure the prior compliance state is
    /// left untouched and the error message is stored.
    pub async fn load_jurisdiction(&self, code: JurisdictionCode, reason: RefetchReason) {
        let generation = {
            let mut s = self.state.lock();
            if !reason.preserves_push_result() {
                s.retire_pair("user-initiated load");
            }
            s.loading = true;
            s.load_generation += 1;
            s.load_generation
        };

        tracing::debug!(jurisdiction = %code, %reason, generation, "loading compliance state");
        let result = self.gateway.compliance(code).await;

        let mut s = self.state.lock();
        if s.load_generation != generation || s.active != Some(code) {
            tracing::debug!(
                jurisdiction = %code,
                generation,
                current = s.load_generation,
                "discarding stale compliance response"
            );
            return;
        }
        s.loading = false;
        match result {
            Ok(compliance) => {
                s.compliance = Some(compliance);
                s.error = None;
            }
            Err(e) => {
                tracing::warn!(jurisdiction = %code, error = %e, "compliance load failed");
                s.error = Some(e.to_string());
            }
        }
    }

    /// Submit a candidate regulation for agentic processing.
    ///
    /// Rejects if a push or approval is already in flight. On success the
    /// push result is stored, the lifecycle advances (to `PENDING_DRAFT`
    /// when the response carries a draft, `APPROVED` when it was applied
    /// immediately), a fresh editable draft is seeded, and one post-push
    /// reconciliation load runs before this call resolves — a caller that
    /// awaits it observes both the push result and the refreshed
    /// compliance state. On failure the error is stored and everything
    /// else is left as it was.
    pub async fn push_regulation(
        &self,
        code: JurisdictionCode,
        regulation: RegulationId,
    ) -> Result<(), ConsoleError> {
        {
            let mut s = self.state.lock();
            if let Some(in_flight) = &s.pushing {
                return Err(ConsoleError::PushInFlight {
                    regulation: in_flight.clone(),
                });
            }
            if s.approving {
                return Err(ConsoleError::ApprovalInFlight);
            }
            s.pushing = Some(regulation.clone());
            s.error = None;
        }

        tracing::info!(jurisdiction = %code, %regulation, "pushing regulation");
        let result = self.gateway.push_regulation(code, &regulation).await;

        let applied = {
            let mut s = self.state.lock();
            s.pushing = None;
            match result {
                Ok(response) if s.active == Some(code) => {
                    let note = format!("push {regulation}");
                    match (&response.draft_id, response.is_pending_review()) {
                        (Some(draft_id), true) => {
                            s.draft = Some(DraftRulebook::seeded(
                                draft_id.clone(),
                                code,
                                response.new_version,
                                &response.updated_rulebook,
                            ));
                            s.lifecycle.begin_pending(note);
                        }
                        _ => {
                            s.draft = None;
                            s.lifecycle.mark_applied(format!("{note} (applied)"));
                        }
                    }
                    s.push_result = Some(response);
                    true
                }
                Ok(_) => {
                    tracing::debug!(
                        jurisdiction = %code,
                        "discarding push response for inactive jurisdiction"
                    );
                    false
                }
                Err(e) => {
                    tracing::warn!(jurisdiction = %code, %regulation, error = %e, "push failed");
                    s.error = Some(e.to_string());
                    false
                }
            }
        };

        if applied {
            // Reconciliation: refresh the available list and version while
            // the push result stays visible.
            self.load_jurisdiction(code, RefetchReason::PostPush).await;
        }
        Ok(())
    }

    /// Apply one local edit to the live draft.
    ///
    /// Pure and synchronous: produces a new draft value, never touches the
    /// stored push result's rulebook.
    pub fn edit_draft(&self, edit: &DraftEdit) -> Result<(), ConsoleError> {
        let mut s = self.state.lock();
        let draft = s.draft.as_ref().ok_or(ConsoleError::NoDraft)?;
        let edited = draft.apply(edit)?;
        s.draft = Some(edited);
        Ok(())
    }

    /// Submit the (possibly edited) draft for promotion to active.
    ///
    /// Silent no-op when no pending draft is live — returns `Ok(false)`
    /// with zero network calls. On success the lifecycle moves to
    /// `APPROVED` and exactly one post-approve reconciliation load runs.
    /// On failure the error is stored and the draft stays pending and
    /// editable. Returns `Ok(true)` when an approval was submitted and
    /// accepted.
    pub async fn approve_draft(&self, code: JurisdictionCode) -> Result<bool, ConsoleError> {
        let (draft_id, edited_rulebook) = {
            let mut s = self.state.lock();
            if s.approving {
                return Err(ConsoleError::ApprovalInFlight);
            }
            if let Some(in_flight) = &s.pushing {
                return Err(ConsoleError::PushInFlight {
                    regulation: in_flight.clone(),
                });
            }
            let pair = match s.draft.as_ref() {
                // No pending draft: unreachable through normal UI flow,
                // not an error.
                Some(draft) if s.lifecycle.phase() == DraftPhase::PendingDraft => {
                    (draft.draft_id.clone(), draft.rulebook.clone())
                }
                _ => return Ok(false),
            };
            s.approving = true;
            s.error = None;
            pair
        };

        tracing::info!(jurisdiction = %code, draft = %draft_id, "approving draft");
        let result = self
            .gateway
            .approve_draft(&draft_id, Some(&edited_rulebook))
            .await;

        let approved = {
            let mut s = self.state.lock();
            s.approving = false;
            match result {
                Ok(_) if s.active == Some(code) => {
                    match s.lifecycle.approve(format!("approve {draft_id}")) {
                        Ok(()) => true,
                        Err(e) => {
                            // The draft slot was retired while the call was in
                            // flight; the approval already happened server-side,
                            // so just drop the local transition.
                            tracing::warn!(draft = %draft_id, error = %e, "discarding approval transition");
                            false
                        }
                    }
                }
                Ok(_) => {
                    tracing::debug!(
                        jurisdiction = %code,
                        "discarding approval response for inactive jurisdiction"
                    );
                    false
                }
                Err(e) => {
                    tracing::warn!(draft = %draft_id, error = %e, "approval failed");
                    s.error = Some(e.to_string());
                    false
                }
            }
        };

        if approved {
            // Reconciliation: the active rulebook now reflects the approved
            // version; the push result stays visible.
            self.load_jurisdiction(code, RefetchReason::PostApprove).await;
        }
        Ok(approved)
    }

    /// Discard the live push-result/draft pair and reset the lifecycle.
    pub fn clear_draft(&self) {
        let mut s = self.state.lock();
        s.retire_pair("cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use vigil_client::wire::{AnalysisReport, ApprovalResponse, IngestBatchRequest, InitResponse};
    use vigil_client::ApiError;
    use vigil_core::DraftId;
    use vigil_rulebook::Rulebook;

    /// A gateway that serves one fixed compliance state and rejects
    /// everything else.
    struct StaticGateway {
        compliance: JurisdictionCompliance,
    }

    impl ComplianceGateway for StaticGateway {
        async fn init(&self) -> Result<InitResponse, ApiError> {
            panic!("unexpected init call")
        }

        async fn compliance(
            &self,
            _code: JurisdictionCode,
        ) -> Result<JurisdictionCompliance, ApiError> {
            Ok(self.compliance.clone())
        }

        async fn ingest_batch(
            &self,
            _request: &IngestBatchRequest,
        ) -> Result<AnalysisReport, ApiError> {
            panic!("unexpected ingest call")
        }

        async fn push_regulation(
            &self,
            _code: JurisdictionCode,
            _regulation: &RegulationId,
        ) -> Result<PushResponse, ApiError> {
            panic!("unexpected push call")
        }

        async fn approve_draft(
            &self,
            _draft: &DraftId,
            _edited_rulebook: Option<&Rulebook>,
        ) -> Result<ApprovalResponse, ApiError> {
            panic!("unexpected approve call")
        }
    }

    fn ae_compliance() -> JurisdictionCompliance {
        serde_json::from_value(serde_json::json!({
            "jurisdiction": "UAE",
            "jurisdiction_code": "AE",
            "current_version": "v3",
            "old_regulations": [],
            "new_regulations": [],
            "rulebook": {
                "amount_based": ["Flag transactions above 10,000 USD"],
                "frequency_based": [],
                "location_based": [],
                "behavioural_pattern": [],
                "risk_score": {"range": "0-100", "rules": [], "capping": "Capped at 100"},
                "risk_bands": {"HIGH": "70-100"}
            },
            "available_new_regulations": []
        }))
        .unwrap()
    }

    #[test]
    fn fresh_console_has_empty_state() {
        let console = ComplianceConsole::new(StaticGateway {
            compliance: ae_compliance(),
        });
        let snapshot = console.snapshot();
        assert!(snapshot.active.is_none());
        assert!(snapshot.compliance.is_none());
        assert!(!snapshot.loading);
        assert_eq!(snapshot.phase, DraftPhase::None);
        assert!(snapshot.transitions.is_empty());
    }

    #[tokio::test]
    async fn select_loads_the_jurisdiction() {
        let console = ComplianceConsole::new(StaticGateway {
            compliance: ae_compliance(),
        });
        console.select_jurisdiction(JurisdictionCode::Ae).await;

        let snapshot = console.snapshot();
        assert_eq!(snapshot.active, Some(JurisdictionCode::Ae));
        assert_eq!(
            snapshot.compliance.unwrap().current_version.to_string(),
            "v3"
        );
        assert!(snapshot.error.is_none());
        assert!(!snapshot.loading);
    }

    #[test]
    fn edit_without_a_draft_is_rejected() {
        let console = ComplianceConsole::new(StaticGateway {
            compliance: ae_compliance(),
        });
        let err = console
            .edit_draft(&vigil_rulebook::DraftEdit::SetScoringRange {
                range: "0-200".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ConsoleError::NoDraft));
    }

    #[test]
    fn clear_with_nothing_live_logs_no_transition() {
        let console = ComplianceConsole::new(StaticGateway {
            compliance: ae_compliance(),
        });
        console.clear_draft();
        assert!(console.snapshot().transitions.is_empty());
    }
}
