//! # Push Subcommand
//!
//! Drives the full draft lifecycle in one session: load the jurisdiction,
//! push a regulation, print the pipeline output, optionally apply a JSON
//! edit script to the draft, optionally approve, and print the final
//! state after the reconciliation refetch.

use std::path::PathBuf;

use clap::Args;

use vigil_core::{JurisdictionCode, RegulationId};
use vigil_lifecycle::ComplianceConsole;
use vigil_rulebook::DraftEdit;

use crate::render;

/// Arguments for the push subcommand.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Jurisdiction code (MT, AE, KY).
    #[arg(long, short)]
    pub jurisdiction: JurisdictionCode,

    /// The regulation to push (e.g. REG-7).
    #[arg(long, short)]
    pub regulation: RegulationId,

    /// Path to a JSON edit script (an array of draft edits) to apply to
    /// the resulting draft.
    #[arg(long)]
    pub edits: Option<PathBuf>,

    /// Approve the draft after any edits.
    #[arg(long)]
    pub approve: bool,
}

fn load_edit_script(path: &PathBuf) -> anyhow::Result<Vec<DraftEdit>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading edit script {}: {e}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("parsing edit script {}: {e}", path.display()))
}

/// Run the push lifecycle end to end.
pub async fn run_push(args: PushArgs) -> anyhow::Result<u8> {
    let edits = match &args.edits {
        Some(path) => load_edit_script(path)?,
        None => Vec::new(),
    };

    let client = crate::client_from_env()?;
    let console = ComplianceConsole::new(client);

    console.select_jurisdiction(args.jurisdiction).await;
    if let Some(error) = console.snapshot().error {
        eprintln!("load failed: {error}");
        return Ok(1);
    }

    console
        .push_regulation(args.jurisdiction, args.regulation)
        .await?;
    let snapshot = console.snapshot();
    if let Some(error) = snapshot.error {
        eprintln!("push failed: {error}");
        return Ok(1);
    }
    let Some(push_result) = snapshot.push_result else {
        eprintln!("push produced no result");
        return Ok(1);
    };
    print!("{}", render::push_summary(&push_result));

    if !edits.is_empty() {
        if snapshot.draft.is_none() {
            eprintln!("no draft to edit: the push was applied immediately");
            return Ok(1);
        }
        for edit in &edits {
            console.edit_draft(edit)?;
        }
        let revision = console
            .snapshot()
            .draft
            .map(|d| d.revision)
            .unwrap_or_default();
        println!("\napplied {} edit(s), draft revision {revision}", edits.len());
    }

    if args.approve {
        let approved = console.approve_draft(args.jurisdiction).await?;
        let snapshot = console.snapshot();
        if let Some(error) = snapshot.error {
            eprintln!("approval failed: {error}");
            return Ok(1);
        }
        if approved {
            println!("draft approved");
        } else {
            println!("nothing to approve");
        }
    }

    let snapshot = console.snapshot();
    println!("\nfinal state: {}", snapshot.phase);
    if let Some(compliance) = &snapshot.compliance {
        println!("active rulebook version: {}", compliance.current_version);
        println!(
            "regulations still available: {}",
            compliance.available_new_regulations.len()
        );
    }
    if snapshot.push_result.is_some() {
        println!("push result retained across refetch");
    }
    Ok(0)
}
