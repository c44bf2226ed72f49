//! # vigil-cli — Operator Command-Line Interface
//!
//! ## Subcommands
//!
//! - `roster` — account roster sorted by risk
//! - `compliance` — one jurisdiction's compliance state
//! - `push` — the full draft lifecycle: push, edit, approve
//! - `ingest` — submit a transaction batch and print the analysis
//! - `health` — backend ping
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the lifecycle and client crates — no
//!   controller logic here.
//! - Handlers return `anyhow::Result<u8>`; the exit code is the payload,
//!   `Err` is reserved for setup failures (bad config, unreadable files).

pub mod compliance;
pub mod health;
pub mod ingest;
pub mod push;
pub mod render;
pub mod roster;

use vigil_client::{ApiConfig, ConsoleClient};

/// Build the backend client from the environment
/// (`VIGIL_API_URL`, `VIGIL_API_TIMEOUT_SECS`).
pub fn client_from_env() -> anyhow::Result<ConsoleClient> {
    let config = ApiConfig::from_env()?;
    tracing::debug!(base_url = %config.base_url, "backend configured");
    Ok(ConsoleClient::new(config)?)
}
