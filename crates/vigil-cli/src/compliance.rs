//! # Compliance Subcommand
//!
//! Shows one jurisdiction's compliance state: version, regulation lists,
//! and optionally the full rulebook text.

use clap::Args;

use vigil_core::JurisdictionCode;

use crate::render;

/// Arguments for the compliance subcommand.
#[derive(Args, Debug)]
pub struct ComplianceArgs {
    /// Jurisdiction code (MT, AE, KY).
    #[arg(long, short)]
    pub jurisdiction: JurisdictionCode,

    /// Also print the full active rulebook.
    #[arg(long)]
    pub rulebook: bool,
}

/// Fetch and print the jurisdiction's compliance state.
pub async fn run_compliance(args: ComplianceArgs) -> anyhow::Result<u8> {
    let client = crate::client_from_env()?;
    match client.compliance(args.jurisdiction).await {
        Ok(compliance) => {
            print!("{}", render::compliance_summary(&compliance, args.rulebook));
            Ok(0)
        }
        Err(e) => {
            eprintln!("compliance fetch failed: {e}");
            Ok(1)
        }
    }
}
