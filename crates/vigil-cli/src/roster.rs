//! # Roster Subcommand
//!
//! Fetches the account roster and prints it sorted by current risk.

use clap::Args;

use vigil_lifecycle::Roster;

use crate::render;

/// Arguments for the roster subcommand.
#[derive(Args, Debug)]
pub struct RosterArgs {}

/// Fetch and print the roster, highest risk first.
pub async fn run_roster(_args: RosterArgs) -> anyhow::Result<u8> {
    let client = crate::client_from_env()?;
    let roster = Roster::new();
    roster.refresh(&client).await;

    let snapshot = roster.snapshot();
    if let Some(error) = snapshot.error {
        eprintln!("roster fetch failed: {error}");
        return Ok(1);
    }

    print!("{}", render::roster_table(&roster.users_by_risk()));
    Ok(0)
}
