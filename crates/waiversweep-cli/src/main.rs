//! waiversweep - expired policy waiver cleanup for Sonatype IQ
//!
//! Finds the waiver CSV export in a directory, identifies waivers whose
//! expiration has passed, and deletes them through the policy waiver
//! API after an explicit operator confirmation.
//!
//! Per-record problems (unparseable dates, unknown scopes, rejected or
//! failed requests) never abort a run; they are reported in the final
//! summary. Only preconditions — no unambiguous export, unreadable
//! file, missing columns — exit non-zero.

mod discover;
mod load;
mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{info, Level};

use waiversweep_client::{IqConfig, IqPolicyClient};
use waiversweep_core::{
    classify_expired, render_deletion_summary, render_expired_listing, render_skipped_listing,
    run_deletions, telemetry,
};

#[derive(Parser)]
#[command(name = "waiversweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find and delete expired Sonatype IQ policy waivers", long_about = None)]
struct Cli {
    /// Directory searched for the waiver export (results-waivers-*.csv)
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// IQ server base URL
    #[arg(long, env = "IQ_SERVER_URL", default_value = "http://localhost:8070")]
    server_url: String,

    /// IQ username
    #[arg(long, env = "IQ_USERNAME", default_value = "admin")]
    username: String,

    /// IQ password
    #[arg(long, env = "IQ_PASSWORD", default_value = "admin123", hide_env_values = true)]
    password: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    telemetry::init_tracing(cli.json, level);

    let export = discover::find_waiver_export(&cli.dir)?;
    println!("Found waiver export: {}", export.display());

    let records = load::load_waiver_records(&export)?;
    println!("Loaded {} total waivers.", records.len());

    // One reference instant per run; every record is classified against it.
    let reference = Utc::now();
    println!(
        "Comparing expiration dates against {}.",
        reference.to_rfc3339()
    );

    let classified = classify_expired(records, reference);

    if !classified.skipped_unparseable.is_empty() {
        println!(
            "{}",
            render_skipped_listing(&classified.skipped_unparseable)
        );
    }

    if classified.expired.is_empty() {
        println!("No expired waivers found in the export.");
        return Ok(());
    }

    println!("{}", render_expired_listing(&classified.expired));

    info!(server = %cli.server_url, "connecting to IQ server");
    let config = IqConfig::new(&cli.server_url, &cli.username, &cli.password);
    let client = IqPolicyClient::new(config).context("failed to construct the IQ client")?;

    let count = classified.expired.len();
    let summary = run_deletions(
        classified.expired,
        || prompt::confirm_deletion(count),
        &client,
    )
    .await;

    println!("{}", render_deletion_summary(&summary));
    Ok(())
}
