//! # vigil CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Vigil — operator console for the compliance monitoring backend.
///
/// Inspects the account roster, views jurisdiction compliance state, and
/// drives the regulation-push / draft-review lifecycle.
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the account roster sorted by current risk.
    Roster(vigil_cli::roster::RosterArgs),
    /// Show one jurisdiction's compliance state.
    Compliance(vigil_cli::compliance::ComplianceArgs),
    /// Push a regulation and walk the draft through edit and approval.
    Push(vigil_cli::push::PushArgs),
    /// Submit a transaction batch and print the analysis.
    Ingest(vigil_cli::ingest::IngestArgs),
    /// Ping the backend.
    Health(vigil_cli::health::HealthArgs),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roster(args) => vigil_cli::roster::run_roster(args).await,
        Commands::Compliance(args) => vigil_cli::compliance::run_compliance(args).await,
        Commands::Push(args) => vigil_cli::push::run_push(args).await,
        Commands::Ingest(args) => vigil_cli::ingest::run_ingest(args).await,
        Commands::Health(args) => vigil_cli::health::run_health(args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
