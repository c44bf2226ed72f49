//! # vigil-client — Typed HTTP Client for the Compliance Backend
//!
//! Ergonomic, typed access to the compliance backend API:
//!
//! - **Roster** via `GET /api/init`
//! - **Jurisdiction compliance** via `GET /api/compliance/{code}` and
//!   `GET /api/rules/{code}`
//! - **Batch ingestion** via `POST /api/ingest-batch`
//! - **Regulation pushes** via `POST /api/compliance/{code}/push`
//! - **Drafts** via `GET /api/drafts` and `POST /api/drafts/{id}/approve`
//!
//! Pure I/O — the client holds no state beyond the connection pool. Error
//! mapping is uniform: transport failures become [`ApiError::Http`],
//! non-2xx responses become [`ApiError::Api`] with the body verbatim, and
//! body-decode failures become [`ApiError::Decode`].

pub mod config;
pub mod error;
pub mod wire;

pub use config::ApiConfig;
pub use error::ApiError;

use std::time::Duration;

use uuid::Uuid;

use vigil_core::{DraftId, JurisdictionCode, RegulationId};
use vigil_rulebook::{Rulebook, RulesView};

use wire::{
    AnalysisReport, ApprovalResponse, ApproveDraftRequest, DraftListResponse, HealthResponse,
    IngestBatchRequest, InitResponse, JurisdictionCompliance, PushResponse,
};

/// Typed client for the compliance backend.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ConsoleClient {
    /// Create a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full account roster with latest risk snapshots.
    ///
    /// Calls `GET /api/init`.
    pub async fn init(&self) -> Result<InitResponse, ApiError> {
        let endpoint = "GET /api/init";
        let url = format!("{}api/init", self.base_url);
        let resp = self.get(endpoint, &url).await?;
        decode(endpoint, resp).await
    }

    /// Fetch the compliance state for one jurisdiction.
    ///
    /// Calls `GET /api/compliance/{code}`.
    pub async fn compliance(
        &self,
        code: JurisdictionCode,
    ) -> Result<JurisdictionCompliance, ApiError> {
        let endpoint = format!("GET /api/compliance/{code}");
        let url = format!("{}api/compliance/{code}", self.base_url);
        let resp = self.get(&endpoint, &url).await?;
        decode(&endpoint, resp).await
    }

    /// Fetch just the active rulebook for one jurisdiction.
    ///
    /// Calls `GET /api/rules/{code}`.
    pub async fn rules(&self, code: JurisdictionCode) -> Result<RulesView, ApiError> {
        let endpoint = format!("GET /api/rules/{code}");
        let url = format!("{}api/rules/{code}", self.base_url);
        let resp = self.get(&endpoint, &url).await?;
        decode(&endpoint, resp).await
    }

    /// Submit a transaction batch for analysis.
    ///
    /// Calls `POST /api/ingest-batch`.
    pub async fn ingest_batch(
        &self,
        request: &IngestBatchRequest,
    ) -> Result<AnalysisReport, ApiError> {
        let endpoint = "POST /api/ingest-batch";
        let url = format!("{}api/ingest-batch", self.base_url);
        let resp = self.post(endpoint, &url, request).await?;
        decode(endpoint, resp).await
    }

    /// Push a candidate regulation through the backend's rulebook-update
    /// pipeline.
    ///
    /// Calls `POST /api/compliance/{code}/push` with body
    /// `{"regulation_update_id": ...}`.
    pub async fn push_regulation(
        &self,
        code: JurisdictionCode,
        regulation: &RegulationId,
    ) -> Result<PushResponse, ApiError> {
        let endpoint = format!("POST /api/compliance/{code}/push");
        let url = format!("{}api/compliance/{code}/push", self.base_url);
        let body = serde_json::json!({ "regulation_update_id": regulation });
        let resp = self.post(&endpoint, &url, &body).await?;
        decode(&endpoint, resp).await
    }

    /// List stored drafts, optionally filtered by jurisdiction.
    ///
    /// Calls `GET /api/drafts[?jurisdiction_code=..]`.
    pub async fn drafts(
        &self,
        code: Option<JurisdictionCode>,
    ) -> Result<DraftListResponse, ApiError> {
        let endpoint = "GET /api/drafts";
        let url = match code {
            Some(code) => format!("{}api/drafts?jurisdiction_code={code}", self.base_url),
            None => format!("{}api/drafts", self.base_url),
        };
        let resp = self.get(endpoint, &url).await?;
        decode(endpoint, resp).await
    }

    /// Approve a pending draft, optionally with the operator's edited
    /// rulebook.
    ///
    /// Calls `POST /api/drafts/{id}/approve`. The body carries
    /// `edited_rulebook` only when edits are supplied; `{}` approves the
    /// draft as proposed.
    pub async fn approve_draft(
        &self,
        draft: &DraftId,
        edited_rulebook: Option<&Rulebook>,
    ) -> Result<ApprovalResponse, ApiError> {
        let endpoint = format!("POST /api/drafts/{draft}/approve");
        let url = format!("{}api/drafts/{draft}/approve", self.base_url);
        let body = ApproveDraftRequest {
            edited_rulebook: edited_rulebook.cloned(),
        };
        let resp = self.post(&endpoint, &url, &body).await?;
        decode(&endpoint, resp).await
    }

    /// Ping the backend.
    ///
    /// Calls `GET /api/health`.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let endpoint = "GET /api/health";
        let url = format!("{}api/health", self.base_url);
        let resp = self.get(endpoint, &url).await?;
        decode(endpoint, resp).await
    }

    async fn get(&self, endpoint: &str, url: &str) -> Result<reqwest::Response, ApiError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, "sending {endpoint}");
        self.http.get(url).send().await.map_err(|e| ApiError::Http {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }

    async fn post<B: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, "sending {endpoint}");
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.to_string(),
                source: e,
            })
    }
}

/// Check the status and decode the body, mapping both failure classes.
///
/// Non-2xx bodies are surfaced verbatim — the backend sends plain-text
/// diagnostics meant for the operator.
async fn decode<T: serde::de::DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            endpoint: endpoint.to_string(),
            status,
            body,
        });
    }
    resp.json().await.map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source: e,
    })
}
