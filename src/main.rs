//! portprobe binary entry point.

use anyhow::Result;
use clap::Parser;
use portprobe::cli::Args;
use portprobe::{output, run_scan};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run(Args::parse()).await {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.into_config()?;

    info!(
        host = %config.host,
        range = %config.range,
        timeout_ms = config.timeout.as_millis() as u64,
        "scanning"
    );

    let report = run_scan(&config).await;

    info!(
        open = report.open_ports.len(),
        probed = report.ports_probed,
        elapsed_ms = report.duration.as_millis() as u64,
        "scan complete"
    );

    output::print_summary(&report.open_ports)?;
    Ok(())
}

/// Diagnostics go to stderr so the stdout marker stream stays clean.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
