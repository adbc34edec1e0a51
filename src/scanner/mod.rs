//! Scanner module - drives probes across a port range.
//!
//! The default mode probes strictly sequentially, one connection in flight at
//! a time, so open ports accumulate already sorted. The opt-in concurrent
//! mode caps in-flight probes with a semaphore, collects outcomes in
//! completion order, and sorts the open-port list before reporting.

pub mod tcp;

use crate::output;
use crate::types::ScanConfig;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

pub use tcp::TcpProbe;

/// Outcome of probing a single port. Exactly one of three events resolves
/// each probe: connection established, connection error, or timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortOutcome {
    /// The connection attempt completed within the timeout.
    Open { port: u16 },
    /// The attempt failed (refused, unreachable, resolution failure, ...).
    /// Carries the error classification and the peer address for diagnostics.
    Refused {
        port: u16,
        code: String,
        peer: String,
    },
    /// The timeout elapsed before the attempt resolved either way.
    TimedOut { port: u16 },
}

impl PortOutcome {
    /// The port this outcome describes.
    pub fn port(&self) -> u16 {
        match *self {
            Self::Open { port } | Self::Refused { port, .. } | Self::TimedOut { port } => port,
        }
    }

    /// Progress marker character: `.` open, `!` error, `_` timeout.
    pub fn marker(&self) -> char {
        match self {
            Self::Open { .. } => '.',
            Self::Refused { .. } => '!',
            Self::TimedOut { .. } => '_',
        }
    }

    /// Whether the port accepted the connection.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Accumulated result of a complete scan run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Open ports in ascending order, no duplicates.
    pub open_ports: Vec<u16>,
    /// Total number of ports probed.
    pub ports_probed: usize,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

/// Execute a complete scan.
///
/// Never fails as a whole operation: individual probe failures are outcomes,
/// recorded and moved past. Emits one progress marker per port as each
/// outcome resolves and logs a diagnostic line for every error outcome.
pub async fn run_scan(config: &ScanConfig) -> ScanReport {
    let started = Instant::now();
    let probe = Arc::new(TcpProbe::new(config.host.as_str(), config.timeout));
    let ports_probed = config.range.len();

    let open_ports = if config.concurrency <= 1 {
        scan_sequential(config, &probe).await
    } else {
        scan_concurrent(config, probe).await
    };

    ScanReport {
        open_ports,
        ports_probed,
        duration: started.elapsed(),
    }
}

/// One probe in flight at a time, ascending port order. The result list is
/// sorted by construction.
async fn scan_sequential(config: &ScanConfig, probe: &TcpProbe) -> Vec<u16> {
    let mut open_ports = Vec::new();

    for port in config.range.iter() {
        let outcome = probe.probe(port).await;
        report_outcome(&outcome);
        if outcome.is_open() {
            open_ports.push(port);
        }
    }

    open_ports
}

/// Bounded worker pool: the semaphore caps in-flight connections, outcomes
/// arrive in completion order, and the open-port list is sorted afterwards to
/// preserve the ascending-order contract.
async fn scan_concurrent(config: &ScanConfig, probe: Arc<TcpProbe>) -> Vec<u16> {
    let semaphore = Arc::new(Semaphore::new(config.concurrency));

    let outcomes: Vec<PortOutcome> = stream::iter(config.range.iter())
        .map(|port| {
            let probe = Arc::clone(&probe);
            let sem = Arc::clone(&semaphore);

            async move {
                let _permit = sem.acquire().await.unwrap();
                let outcome = probe.probe(port).await;
                report_outcome(&outcome);
                outcome
            }
        })
        .buffer_unordered(config.concurrency)
        .collect()
        .await;

    let mut open_ports: Vec<u16> = outcomes
        .iter()
        .filter(|o| o.is_open())
        .map(PortOutcome::port)
        .collect();
    open_ports.sort_unstable();
    open_ports
}

/// Emit the progress marker for an outcome and, for error outcomes, a
/// diagnostic line with the error code and peer address.
fn report_outcome(outcome: &PortOutcome) {
    output::emit_marker(outcome.marker());
    if let PortOutcome::Refused { code, peer, .. } = outcome {
        info!(code = %code, peer = %peer, "connection attempt failed");
    }
}
