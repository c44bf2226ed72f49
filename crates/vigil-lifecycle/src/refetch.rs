//! Refetch reasons.
//!
//! Every compliance load names why it was issued. Whether the load clears
//! the live push-result/draft pair before fetching is a pure function of
//! the reason — there is no ambient "preserve" flag to arm or forget.

use serde::{Deserialize, Serialize};

/// Why a compliance load was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefetchReason {
    /// The operator asked for fresh data (initial load, tab selection,
    /// manual refresh). Clears the push-result pair before fetching.
    User,
    /// Reconciliation after a successful push: the available-regulations
    /// list and version must refresh while the push result stays visible.
    PostPush,
    /// Reconciliation after a successful approval: the active rulebook
    /// must refresh while the push result stays visible.
    PostApprove,
}

impl RefetchReason {
    /// Whether a load for this reason keeps the live push result.
    pub fn preserves_push_result(&self) -> bool {
        match self {
            Self::User => false,
            Self::PostPush | Self::PostApprove => true,
        }
    }
}

impl std::fmt::Display for RefetchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::PostPush => "post-push",
            Self::PostApprove => "post-approve",
        };
        write!(f, "{s}")
    }
}
