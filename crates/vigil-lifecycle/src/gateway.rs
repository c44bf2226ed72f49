//! The gateway seam.
//!
//! [`ComplianceGateway`] is the trait boundary between the lifecycle
//! controller and the HTTP client, so controller semantics are testable
//! against scripted gateways without a server. `ConsoleClient` is the
//! production implementation.

use vigil_core::{DraftId, JurisdictionCode, RegulationId};
use vigil_rulebook::Rulebook;

use vigil_client::wire::{
    AnalysisReport, ApprovalResponse, IngestBatchRequest, InitResponse, JurisdictionCompliance,
    PushResponse,
};
use vigil_client::{ApiError, ConsoleClient};

/// The backend operations the lifecycle controller and roster drive.
///
/// Implementations are expected to be cheap to call concurrently from a
/// single task; the controller never issues overlapping calls for the
/// same operation.
#[allow(async_fn_in_trait)]
pub trait ComplianceGateway {
    /// Fetch the account roster.
    async fn init(&self) -> Result<InitResponse, ApiError>;

    /// Fetch one jurisdiction's compliance state.
    async fn compliance(
        &self,
        code: JurisdictionCode,
    ) -> Result<JurisdictionCompliance, ApiError>;

    /// Submit a transaction batch for analysis.
    async fn ingest_batch(
        &self,
        request: &IngestBatchRequest,
    ) -> Result<AnalysisReport, ApiError>;

    /// Push a candidate regulation through the backend pipeline.
    async fn push_regulation(
        &self,
        code: JurisdictionCode,
        regulation: &RegulationId,
    ) -> Result<PushResponse, ApiError>;

    /// Approve a pending draft, optionally with an edited rulebook.
    async fn approve_draft(
        &self,
        draft: &DraftId,
        edited_rulebook: Option<&Rulebook>,
    ) -> Result<ApprovalResponse, ApiError>;
}

impl ComplianceGateway for ConsoleClient {
    async fn init(&self) -> Result<InitResponse, ApiError> {
        ConsoleClient::init(self).await
    }

    async fn compliance(
        &self,
        code: JurisdictionCode,
    ) -> Result<JurisdictionCompliance, ApiError> {
        ConsoleClient::compliance(self, code).await
    }

    async fn ingest_batch(
        &self,
        request: &IngestBatchRequest,
    ) -> Result<AnalysisReport, ApiError> {
        ConsoleClient::ingest_batch(self, request).await
    }

    async fn push_regulation(
        &self,
        code: JurisdictionCode,
        regulation: &RegulationId,
    ) -> Result<PushResponse, ApiError> {
        ConsoleClient::push_regulation(self, code, regulation).await
    }

    async fn approve_draft(
        &self,
        draft: &DraftId,
        edited_rulebook: Option<&Rulebook>,
    ) -> Result<ApprovalResponse, ApiError> {
        ConsoleClient::approve_draft(self, draft, edited_rulebook).await
    }
}
