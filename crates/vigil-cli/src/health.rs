//! # Health Subcommand
//!
//! Pings the backend.

use clap::Args;

/// Arguments for the health subcommand.
#[derive(Args, Debug)]
pub struct HealthArgs {}

/// Ping the backend and print its status line.
pub async fn run_health(_args: HealthArgs) -> anyhow::Result<u8> {
    let client = crate::client_from_env()?;
    match client.health().await {
        Ok(health) => {
            println!("{} at {}", health.status, health.timestamp);
            Ok(0)
        }
        Err(e) => {
            eprintln!("backend unreachable: {e}");
            Ok(1)
        }
    }
}
