//! Command-line interface definitions.
//!
//! Uses `clap` derive macros for declarative argument parsing.
//!
//! `-h` is claimed by `--host`, so the automatic help short flag is
//! disabled and `--help` stays long-only.
//! clap has no multi-character short flags, so the timeout also answers to
//! `--st` as an alias besides `-t`.

use crate::error::{ConfigError, ConfigResult};
use crate::types::{PortRange, ScanConfig};
use clap::{ArgAction, Parser};
use std::time::Duration;

/// Probe a range of TCP ports on a host and report which accept connections.
#[derive(Parser, Debug)]
#[command(name = "portprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A sequential TCP port prober", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Host name or address to scan (e.g. 127.0.0.1, example.com)
    #[arg(short = 'h', long)]
    pub host: String,

    /// Port range to scan, format <start>-<end> (e.g. 0-1023)
    #[arg(short = 'p', long, default_value = "0-65535")]
    pub ports: String,

    /// Per-probe socket timeout in milliseconds
    #[arg(
        short = 't',
        long = "socket-timeout",
        alias = "st",
        default_value_t = 300,
        allow_negative_numbers = true
    )]
    pub socket_timeout: i64,

    /// Maximum number of probes in flight (1 = strictly sequential)
    #[arg(short = 'c', long, default_value_t = 1)]
    pub concurrency: usize,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// Validate the raw arguments into an immutable [`ScanConfig`].
    ///
    /// Any failure here is fatal and aborts before the first probe.
    pub fn into_config(self) -> ConfigResult<ScanConfig> {
        let range: PortRange = self.ports.parse()?;

        if self.socket_timeout <= 0 {
            return Err(ConfigError::NonPositiveTimeout(self.socket_timeout));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        Ok(ScanConfig::new(self.host, range)
            .with_timeout(Duration::from_millis(self.socket_timeout as u64))
            .with_concurrency(self.concurrency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(host: &str, ports: &str, socket_timeout: i64) -> Args {
        Args {
            host: host.to_string(),
            ports: ports.to_string(),
            socket_timeout,
            concurrency: 1,
            help: None,
        }
    }

    #[test]
    fn test_host_is_required() {
        assert!(Args::try_parse_from(["portprobe"]).is_err());
        assert!(Args::try_parse_from(["portprobe", "-p", "1-10"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let parsed = Args::try_parse_from(["portprobe", "-h", "127.0.0.1"]).unwrap();
        assert_eq!(parsed.ports, "0-65535");
        assert_eq!(parsed.socket_timeout, 300);
        assert_eq!(parsed.concurrency, 1);

        let config = parsed.into_config().unwrap();
        assert_eq!(config.range, PortRange::full());
        assert_eq!(config.timeout, Duration::from_millis(300));
    }

    #[test]
    fn test_long_and_alias_flags() {
        let parsed = Args::try_parse_from([
            "portprobe",
            "--host",
            "example.com",
            "--ports",
            "80-443",
            "--socket-timeout",
            "1000",
        ])
        .unwrap();
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.socket_timeout, 1000);

        let parsed =
            Args::try_parse_from(["portprobe", "-h", "example.com", "--st", "250"]).unwrap();
        assert_eq!(parsed.socket_timeout, 250);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            args("127.0.0.1", "20-10", 300).into_config(),
            Err(ConfigError::InvertedRange(20, 10))
        ));
    }

    #[test]
    fn test_negative_timeout_rejected() {
        assert!(matches!(
            args("127.0.0.1", "0-10", -5).into_config(),
            Err(ConfigError::NonPositiveTimeout(-5))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(matches!(
            args("127.0.0.1", "0-10", 0).into_config(),
            Err(ConfigError::NonPositiveTimeout(0))
        ));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut raw = args("127.0.0.1", "0-10", 300);
        raw.concurrency = 0;
        assert!(matches!(
            raw.into_config(),
            Err(ConfigError::ZeroConcurrency)
        ));
    }

    #[test]
    fn test_negative_timeout_parses_from_cli() {
        // allow_negative_numbers lets "-5" through to validation, which
        // rejects it with a descriptive error rather than a usage error.
        let parsed =
            Args::try_parse_from(["portprobe", "-h", "127.0.0.1", "--socket-timeout", "-5"])
                .unwrap();
        assert!(parsed.into_config().is_err());
    }

    #[test]
    fn test_single_port_range_accepted() {
        let config = args("127.0.0.1", "10-10", 300).into_config().unwrap();
        assert_eq!(config.range.len(), 1);
        assert_eq!(config.range.start(), 10);
    }
}
