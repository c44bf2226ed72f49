//! # Ingest Subcommand
//!
//! Submits a transaction batch for one account and prints the analysis
//! the backend pipeline returns.

use clap::Args;

use vigil_core::UserId;
use vigil_client::wire::IngestBatchRequest;
use vigil_lifecycle::Roster;

use crate::render;

/// Arguments for the ingest subcommand.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// The account to generate transactions for.
    #[arg(long, short)]
    pub user: UserId,

    /// How many transactions to generate.
    #[arg(long, short, default_value_t = 5)]
    pub count: u32,

    /// Minimum transaction amount in USD.
    #[arg(long)]
    pub min_amount: Option<f64>,

    /// Maximum transaction amount in USD.
    #[arg(long)]
    pub max_amount: Option<f64>,

    /// Amount variance factor.
    #[arg(long)]
    pub variance: Option<f64>,

    /// Countries to draw transaction locations from (repeatable).
    #[arg(long = "country")]
    pub countries: Vec<String>,
}

/// Submit the batch and print the analysis report.
pub async fn run_ingest(args: IngestArgs) -> anyhow::Result<u8> {
    let request = IngestBatchRequest {
        user_id: args.user,
        num_transactions: args.count,
        min_amount: args.min_amount,
        max_amount: args.max_amount,
        variance: args.variance,
        countries: (!args.countries.is_empty()).then_some(args.countries),
        overrides: None,
    };

    let client = crate::client_from_env()?;
    let roster = Roster::new();
    roster.refresh(&client).await;

    match roster.ingest(&client, &request).await {
        Ok(report) => {
            print!("{}", render::analysis_text(&report));
            Ok(0)
        }
        Err(e) => {
            eprintln!("ingest failed: {e}");
            Ok(1)
        }
    }
}
