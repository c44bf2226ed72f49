//! Wire types for the compliance backend API.
//!
//! Shapes match the backend JSON exactly. Resilience conventions:
//! no `deny_unknown_fields` anywhere (the live backend may add fields),
//! `#[serde(default)]` on fields the backend may omit, and a
//! forward-compatible `Unknown` catch-all on wire enums the backend may
//! extend.

use serde::{Deserialize, Serialize};

use vigil_core::{DraftId, JurisdictionCode, RegulationId, RiskBand, RiskProfile, UserId};
use vigil_rulebook::{Regulation, Rulebook, RulebookVersion};

// -- Accounts and baselines ---------------------------------------------------

/// KYC verification status of a monitored account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Identity verified.
    Verified,
    /// Verification in progress.
    Pending,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// Declared income bracket of a monitored account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeLevel {
    /// Low income bracket.
    Low,
    /// Medium income bracket.
    Medium,
    /// High income bracket.
    High,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// A monitored account's KYC profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub age: u32,
    pub country: String,
    pub full_name: String,
    pub income_level: IncomeLevel,
    pub occupation: String,
    pub kyc_status: KycStatus,
    pub risk_profile: RiskProfile,
    #[serde(default)]
    pub historical_countries: Vec<String>,
}

/// An account's learned transaction baseline, computed server-side from
/// anomaly-excluded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBaseline {
    pub user_id: UserId,
    pub avg_tx_amount_usd: f64,
    pub avg_daily_total_usd: f64,
    pub avg_tx_per_day: f64,
    pub std_dev_amount: f64,
    pub normal_hour_range: Vec<u32>,
    pub excluded_anomalies_count: u32,
    pub min_tx_amount_usd: f64,
    pub max_tx_amount_usd: f64,
}

/// A raw transaction as generated or replayed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub user_id: UserId,
    pub timestamp: String,
    pub transaction_amount_usd: f64,
    pub transaction_currency: String,
    pub transaction_type: String,
    pub transaction_country: String,
    pub transaction_city: String,
}

/// A transaction enriched by the backend's preprocessor with derived
/// features (geo-velocity, deviation figures). Rendered only — the console
/// never derives these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessedTransaction {
    pub user_id: UserId,
    pub timestamp: String,
    pub transaction_amount_usd: f64,
    pub transaction_currency: String,
    pub transaction_type: String,
    pub transaction_country: String,
    pub transaction_city: String,
    pub hour_of_day: u32,
    pub time_since_last_sec: f64,
    pub previous_country: String,
    pub previous_timestamp: String,
    pub distance_km: f64,
    pub actual_travel_hours: f64,
    pub daily_total_usd: f64,
    pub tx_count_per_day: u32,
    pub is_new_country: bool,
}

// -- Agent traces ---------------------------------------------------------------

/// Outcome category of one backend pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Stage completed with no findings.
    Success,
    /// Stage completed and raised a finding.
    Alert,
    /// Stage completed and raised a high-severity finding.
    High,
    /// Stage completed (neutral terminal marker).
    Complete,
    /// Stage failed.
    Error,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// Why a pipeline stage was retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryKind {
    /// Transport/model failure, retried as-is.
    Technical,
    /// The validator rejected the stage's output, retried with feedback.
    Logical,
}

/// One entry in the ordered agent-execution trace.
///
/// Produced wholesale by the backend; the console renders entries and
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTraceEntry {
    /// Pipeline stage name (e.g. `"Summarizer Agent"`).
    pub agent: String,
    /// Display icon hint from the backend.
    #[serde(default)]
    pub icon: String,
    /// Outcome category.
    pub status: AgentStatus,
    /// Human-readable stage message.
    pub message: String,
    /// Stage duration in milliseconds.
    pub duration_ms: f64,
    /// Retry count, when the stage was retried.
    #[serde(default)]
    pub retry_count: Option<u32>,
    /// Retry classification, when the stage was retried.
    #[serde(default, rename = "retry_type")]
    pub retry_kind: Option<RetryKind>,
}

// -- Analysis -------------------------------------------------------------------

/// The full analysis result for one ingested batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub user_id: UserId,
    pub user_name: String,
    pub jurisdiction: String,
    pub risk_score: f64,
    pub risk_band: RiskBand,
    pub risk_profile: RiskProfile,
    pub reasoning: String,
    pub flags: Vec<String>,
    pub regulations_violated: Vec<String>,
    pub agent_chain: Vec<AgentTraceEntry>,
    pub preprocessed: PreprocessedTransaction,
    pub baseline: UserBaseline,
    pub generated_transactions: Vec<RawTransaction>,
    pub timestamp: String,
    #[serde(default)]
    pub trace_id: Option<String>,
    #[serde(default)]
    pub validator_loops: Option<u32>,
}

/// One account in the roster, with its latest risk snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithState {
    pub profile: UserProfile,
    pub baseline: UserBaseline,
    pub current_risk_score: f64,
    pub current_risk_band: RiskBand,
    #[serde(default)]
    pub latest_analysis: Option<AnalysisReport>,
    #[serde(default)]
    pub historical_transactions: Vec<RawTransaction>,
}

/// The `GET /api/init` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitResponse {
    pub users: Vec<UserWithState>,
}

/// The `POST /api/ingest-batch` request body.
///
/// Optional tuning knobs are omitted from the wire when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestBatchRequest {
    pub user_id: UserId,
    pub num_transactions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<IngestOverrides>,
}

/// Field overrides for generated transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_currency: Option<String>,
}

// -- Compliance -------------------------------------------------------------------

/// The `GET /api/compliance/{code}` response: one jurisdiction's full
/// compliance state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionCompliance {
    /// Human-readable jurisdiction name.
    pub jurisdiction: String,
    pub jurisdiction_code: JurisdictionCode,
    pub current_version: RulebookVersion,
    /// Regulations the active rulebook was originally built from.
    pub old_regulations: Vec<Regulation>,
    /// Regulations already pushed and incorporated.
    pub new_regulations: Vec<Regulation>,
    /// The active rulebook.
    pub rulebook: Rulebook,
    /// Regulations available to push, not yet incorporated.
    pub available_new_regulations: Vec<Regulation>,
}

impl JurisdictionCompliance {
    /// Whether `regulation` is still listed as available to push.
    pub fn is_available(&self, regulation: &RegulationId) -> bool {
        self.available_new_regulations
            .iter()
            .any(|r| &r.regulation_update_id == regulation)
    }
}

/// Wire value marking a push response whose rulebook awaits human review.
pub const STATUS_PENDING_REVIEW: &str = "pending_review";

/// The `POST /api/compliance/{code}/push` response: the agent pipeline's
/// output for one push attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushResponse {
    pub jurisdiction_code: JurisdictionCode,
    /// The version the rulebook becomes (or would become, for a draft).
    pub new_version: RulebookVersion,
    /// Narrative summary of the pushed regulation.
    pub summary: String,
    /// Ordered comparison points against the old regulations.
    pub comparison_points: Vec<String>,
    /// Impact analysis text.
    pub impact_analysis: String,
    /// Natural-language description of the rulebook changes.
    pub rulebook_changes: String,
    /// The proposed rulebook.
    pub updated_rulebook: Rulebook,
    /// Ordered agent-execution trace.
    pub agent_chain: Vec<AgentTraceEntry>,
    /// Present when the backend produced a reviewable draft.
    #[serde(default)]
    pub draft_id: Option<DraftId>,
    /// `"pending_review"` for a draft; anything else (or absent) means the
    /// rulebook was applied immediately.
    #[serde(default)]
    pub status: Option<String>,
}

impl PushResponse {
    /// Whether this push produced a draft awaiting review.
    pub fn is_pending_review(&self) -> bool {
        self.status.as_deref() == Some(STATUS_PENDING_REVIEW)
    }
}

/// Review status of a stored draft record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftReviewStatus {
    /// Awaiting review.
    Pending,
    /// Approved and promoted.
    Approved,
    /// Rejected by the reviewer.
    Rejected,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// A stored draft as returned by `GET /api/drafts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub id: DraftId,
    pub jurisdiction_code: JurisdictionCode,
    pub proposed_version: RulebookVersion,
    pub rulebook: Rulebook,
    #[serde(default)]
    pub previous_rulebook: Option<Rulebook>,
    pub changes_description: String,
    pub summary: String,
    pub comparison_points: Vec<String>,
    pub impact_analysis: String,
    pub agent_chain: Vec<AgentTraceEntry>,
    pub regulation_id: RegulationId,
    pub status: DraftReviewStatus,
    pub created_at: String,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

/// The `GET /api/drafts` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftListResponse {
    pub drafts: Vec<DraftRecord>,
}

/// The `POST /api/drafts/{id}/approve` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveDraftRequest {
    /// The operator's edited rulebook; absent approves the draft as
    /// proposed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_rulebook: Option<Rulebook>,
}

/// The `POST /api/drafts/{id}/approve` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalResponse {
    pub status: String,
    pub draft: DraftRecord,
    pub message: String,
}

/// The `GET /api/health` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
