//! # vigil-lifecycle — Compliance Draft Lifecycle Controller
//!
//! The stateful core of the console. [`ComplianceConsole`] owns one
//! jurisdiction's compliance state, the in-flight operation flags, and the
//! live push-result/draft pair, and upholds the invariants the rest of the
//! workspace relies on:
//!
//! - exactly one push-result/draft pair is live at a time, scoped to the
//!   active jurisdiction; switching jurisdictions or pushing again retires
//!   the previous pair;
//! - a refetch triggered by a completed push or approval preserves the
//!   push result; a user-initiated load clears it first — the distinction
//!   is an explicit [`RefetchReason`] parameter, never ambient state;
//! - stale load responses (superseded by a newer load or a jurisdiction
//!   switch) are discarded via a request-generation token;
//! - a failed network operation leaves state exactly as it was, apart from
//!   the advisory error message.
//!
//! Locks are `parking_lot::Mutex`, taken briefly and never held across an
//! `.await`.

pub mod console;
pub mod gateway;
pub mod machine;
pub mod refetch;
pub mod roster;

pub use console::{ComplianceConsole, ConsoleError, ConsoleSnapshot};
pub use gateway::ComplianceGateway;
pub use machine::{DraftLifecycle, DraftPhase, DraftStatus, TransitionError, TransitionRecord};
pub use refetch::RefetchReason;
pub use roster::{Roster, RosterSnapshot};
