//! TCP connect probe.
//!
//! One probe is one connection attempt raced against the configured timeout,
//! using the operating system's socket API and resolver. No privileges
//! required; the full handshake is completed and the stream dropped at once.

use crate::scanner::PortOutcome;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Probes individual ports on a single host.
///
/// The host is kept as the original string and handed to the resolver on
/// every attempt, so a name that fails to resolve yields a per-port error
/// outcome instead of aborting the run.
pub struct TcpProbe {
    host: Arc<str>,
    timeout: Duration,
}

impl TcpProbe {
    /// Create a probe for the given host with a per-attempt timeout.
    pub fn new(host: impl Into<Arc<str>>, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            timeout,
        }
    }

    /// Attempt one TCP connection to `(host, port)`.
    ///
    /// Resolves to exactly one of the three outcomes; never returns an error.
    /// An established stream is dropped immediately, which closes the socket.
    pub async fn probe(&self, port: u16) -> PortOutcome {
        match timeout(self.timeout, TcpStream::connect((&*self.host, port))).await {
            Ok(Ok(stream)) => {
                drop(stream);
                PortOutcome::Open { port }
            }
            Ok(Err(e)) => PortOutcome::Refused {
                port,
                code: error_code(&e),
                peer: format!("{}:{}", self.host, port),
            },
            Err(_) => PortOutcome::TimedOut { port },
        }
    }
}

/// Compact classification of a connect error, e.g. `ConnectionRefused`.
fn error_code(e: &io::Error) -> String {
    format!("{:?}", e.kind())
}
