//! Core types: validated port ranges and the immutable scan configuration.
//!
//! `PortRange` enforces its invariants at construction, so every value held
//! by a `ScanConfig` is known valid for the whole run.

use crate::error::{ConfigError, ConfigResult};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Lowest probeable port number.
pub const MIN_PORT: u16 = 0;
/// Highest probeable port number.
pub const MAX_PORT: u16 = 65535;

/// An inclusive range of ports, `start <= end`, both within `[0, 65535]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Create a new port range, rejecting inverted bounds.
    pub fn new(start: u16, end: u16) -> ConfigResult<Self> {
        if start > end {
            Err(ConfigError::InvertedRange(start, end))
        } else {
            Ok(Self { start, end })
        }
    }

    /// The full probeable range, `0-65535`.
    pub const fn full() -> Self {
        Self {
            start: MIN_PORT,
            end: MAX_PORT,
        }
    }

    /// First port in the range.
    pub const fn start(&self) -> u16 {
        self.start
    }

    /// Last port in the range.
    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports in the range (at least 1 for any valid range).
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// A valid range always holds at least one port.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the ports in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A range endpoint: one to five ASCII digits.
fn is_endpoint(s: &str) -> bool {
    (1..=5).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for PortRange {
    type Err = ConfigError;

    /// Parse the strict `<start>-<end>` form, e.g. `0-1023`.
    ///
    /// Five-digit endpoints above 65535 (such as `99999`) parse as numbers
    /// but are rejected as out-of-range rather than as malformed input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedRange(s.to_string());

        let (start, end) = s.split_once('-').ok_or_else(malformed)?;
        if !is_endpoint(start) || !is_endpoint(end) {
            return Err(malformed());
        }

        // Five digits fit in u32; the bound check produces the right error
        // for values like 99999 that overflow u16.
        let start: u32 = start.parse().map_err(|_| malformed())?;
        let end: u32 = end.parse().map_err(|_| malformed())?;

        let start = bound_check(start)?;
        let end = bound_check(end)?;

        Self::new(start, end)
    }
}

fn bound_check(port: u32) -> ConfigResult<u16> {
    if port > MAX_PORT as u32 {
        Err(ConfigError::PortOutOfRange(port))
    } else {
        Ok(port as u16)
    }
}

/// Immutable configuration for one scan run.
///
/// Constructed once from validated input (see [`crate::cli::Args`]) and
/// passed by reference thereafter.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Host name or address to probe. Any string is accepted; resolution
    /// failures surface as per-port outcomes, not configuration errors.
    pub host: String,
    /// Inclusive range of ports to probe.
    pub range: PortRange,
    /// Per-probe socket timeout.
    pub timeout: Duration,
    /// Maximum number of probes in flight. 1 means strictly sequential.
    pub concurrency: usize,
}

impl ScanConfig {
    /// Default per-probe timeout in milliseconds.
    pub const DEFAULT_TIMEOUT_MS: u64 = 300;

    /// Create a configuration with the default timeout and sequential probing.
    pub fn new(host: impl Into<String>, range: PortRange) -> Self {
        Self {
            host: host.into(),
            range,
            timeout: Duration::from_millis(Self::DEFAULT_TIMEOUT_MS),
            concurrency: 1,
        }
    }

    /// Set the per-probe timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the probe concurrency cap.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}
