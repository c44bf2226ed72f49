//! The monitored-account roster.
//!
//! [`Roster`] holds the account list with each account's latest risk
//! snapshot, refreshed wholesale from the backend and updated in place
//! when a new analysis arrives. Same locking discipline as the console:
//! the mutex is never held across an `.await`.

use parking_lot::Mutex;

use vigil_core::UserId;

use vigil_client::wire::{AnalysisReport, IngestBatchRequest, InitResponse, UserWithState};
use vigil_client::ApiError;

use crate::gateway::ComplianceGateway;

#[derive(Debug, Default)]
struct RosterState {
    users: Vec<UserWithState>,
    loading: bool,
    error: Option<String>,
}

/// A read-only copy of the roster for presentation.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    /// Monitored accounts in backend order.
    pub users: Vec<UserWithState>,
    /// Whether a refresh is in flight.
    pub loading: bool,
    /// The current advisory error message, if any.
    pub error: Option<String>,
}

/// The monitored-account roster with latest risk snapshots.
#[derive(Debug, Default)]
pub struct Roster {
    state: Mutex<RosterState>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// A read-only copy of the current state.
    pub fn snapshot(&self) -> RosterSnapshot {
        let s = self.state.lock();
        RosterSnapshot {
            users: s.users.clone(),
            loading: s.loading,
            error: s.error.clone(),
        }
    }

    /// Fetch the account roster and replace the list wholesale.
    ///
    /// On failure the prior list is kept and the error message is stored.
    pub async fn refresh<G: ComplianceGateway>(&self, gateway: &G) {
        {
            let mut s = self.state.lock();
            s.loading = true;
        }

        let result = gateway.init().await;

        let mut s = self.state.lock();
        s.loading = false;
        match result {
            Ok(InitResponse { users }) => {
                tracing::debug!(count = users.len(), "roster refreshed");
                s.users = users;
                s.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "roster refresh failed");
                s.error = Some(e.to_string());
            }
        }
    }

    /// Merge a fresh analysis into the matching account's snapshot:
    /// risk score, band, profile, and the latest-analysis slot. Accounts
    /// the report does not name are untouched; an unmatched report is
    /// dropped with a warning.
    pub fn apply_analysis(&self, report: &AnalysisReport) {
        let mut s = self.state.lock();
        match s.users.iter_mut().find(|u| u.profile.user_id == report.user_id) {
            Some(user) => {
                user.current_risk_score = report.risk_score;
                user.current_risk_band = report.risk_band;
                user.profile.risk_profile = report.risk_profile;
                user.latest_analysis = Some(report.clone());
            }
            None => {
                tracing::warn!(user = %report.user_id, "analysis for unknown account dropped");
            }
        }
    }

    /// Submit a transaction batch for analysis and fold the result into
    /// the roster. The report is returned so callers can render it.
    pub async fn ingest<G: ComplianceGateway>(
        &self,
        gateway: &G,
        request: &IngestBatchRequest,
    ) -> Result<AnalysisReport, ApiError> {
        tracing::info!(user = %request.user_id, count = request.num_transactions, "ingesting batch");
        let report = gateway.ingest_batch(request).await?;
        self.apply_analysis(&report);
        Ok(report)
    }

    /// Accounts sorted by current risk score, highest first.
    pub fn users_by_risk(&self) -> Vec<UserWithState> {
        let mut users = self.state.lock().users.clone();
        users.sort_by(|a, b| {
            b.current_risk_score
                .partial_cmp(&a.current_risk_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        users
    }

    /// Look up one account by identifier.
    pub fn user(&self, id: &UserId) -> Option<UserWithState> {
        self.state
            .lock()
            .users
            .iter()
            .find(|u| &u.profile.user_id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use vigil_core::{RiskBand, RiskProfile};
    use vigil_client::wire::{
        IncomeLevel, KycStatus, PreprocessedTransaction, UserBaseline, UserProfile,
    };

    fn baseline(id: &str) -> UserBaseline {
        UserBaseline {
            user_id: UserId::new(id).unwrap(),
            avg_tx_amount_usd: 250.0,
            avg_daily_total_usd: 600.0,
            avg_tx_per_day: 2.4,
            std_dev_amount: 80.0,
            normal_hour_range: vec![8, 22],
            excluded_anomalies_count: 1,
            min_tx_amount_usd: 10.0,
            max_tx_amount_usd: 900.0,
        }
    }

    fn user(id: &str, score: f64, band: RiskBand) -> UserWithState {
        UserWithState {
            profile: UserProfile {
                user_id: UserId::new(id).unwrap(),
                age: 34,
                country: "AE".to_string(),
                full_name: format!("Account {id}"),
                income_level: IncomeLevel::Medium,
                occupation: "trader".to_string(),
                kyc_status: KycStatus::Verified,
                risk_profile: RiskProfile::Low,
                historical_countries: vec!["AE".to_string()],
            },
            baseline: baseline(id),
            current_risk_score: score,
            current_risk_band: band,
            latest_analysis: None,
            historical_transactions: Vec::new(),
        }
    }

    fn report(id: &str, score: f64, band: RiskBand) -> AnalysisReport {
        AnalysisReport {
            user_id: UserId::new(id).unwrap(),
            user_name: format!("Account {id}"),
            jurisdiction: "UAE".to_string(),
            risk_score: score,
            risk_band: band,
            risk_profile: RiskProfile::High,
            reasoning: "velocity spike".to_string(),
            flags: vec!["GEO_VELOCITY".to_string()],
            regulations_violated: Vec::new(),
            agent_chain: Vec::new(),
            preprocessed: PreprocessedTransaction {
                user_id: UserId::new(id).unwrap(),
                timestamp: "2026-02-01T10:00:00Z".to_string(),
                transaction_amount_usd: 5000.0,
                transaction_currency: "USD".to_string(),
                transaction_type: "transfer".to_string(),
                transaction_country: "KY".to_string(),
                transaction_city: "George Town".to_string(),
                hour_of_day: 10,
                time_since_last_sec: 1800.0,
                previous_country: "AE".to_string(),
                previous_timestamp: "2026-02-01T09:30:00Z".to_string(),
                distance_km: 12000.0,
                actual_travel_hours: 0.5,
                daily_total_usd: 5000.0,
                tx_count_per_day: 3,
                is_new_country: true,
            },
            baseline: baseline(id),
            generated_transactions: Vec::new(),
            timestamp: "2026-02-01T10:00:01Z".to_string(),
            trace_id: None,
            validator_loops: Some(1),
        }
    }

    fn seeded() -> Roster {
        let roster = Roster::new();
        {
            let mut s = roster.state.lock();
            s.users = vec![
                user("user_001", 12.0, RiskBand::Clean),
                user("user_002", 64.0, RiskBand::Medium),
            ];
        }
        roster
    }

    #[test]
    fn apply_analysis_merges_in_place() {
        let roster = seeded();
        roster.apply_analysis(&report("user_001", 88.0, RiskBand::High));

        let id = UserId::new("user_001").unwrap();
        let updated = roster.user(&id).unwrap();
        assert_eq!(updated.current_risk_score, 88.0);
        assert_eq!(updated.current_risk_band, RiskBand::High);
        assert_eq!(updated.profile.risk_profile, RiskProfile::High);
        assert!(updated.latest_analysis.is_some());

        let other = roster.user(&UserId::new("user_002").unwrap()).unwrap();
        assert_eq!(other.current_risk_score, 64.0);
        assert!(other.latest_analysis.is_none());
    }

    #[test]
    fn apply_analysis_for_unknown_account_is_dropped() {
        let roster = seeded();
        roster.apply_analysis(&report("user_999", 88.0, RiskBand::High));
        assert!(roster.user(&UserId::new("user_999").unwrap()).is_none());
        assert_eq!(roster.snapshot().users.len(), 2);
    }

    #[test]
    fn users_by_risk_sorts_descending() {
        let roster = seeded();
        roster.apply_analysis(&report("user_001", 88.0, RiskBand::High));
        let ranked = roster.users_by_risk();
        assert_eq!(ranked[0].profile.user_id.as_str(), "user_001");
        assert_eq!(ranked[1].profile.user_id.as_str(), "user_002");
    }
}
