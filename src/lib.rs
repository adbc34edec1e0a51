//! # portprobe - A Sequential TCP Port Prober
//!
//! portprobe attempts a TCP connection to every port in an inclusive range
//! on a single host, classifies each attempt as open, refused, or timed-out,
//! and reports the open ports in ascending order.
//!
//! Probing is strictly sequential by default, one connection in flight at a
//! time, which bounds resource usage trivially. An opt-in bounded-concurrency
//! mode dispatches probes through a semaphore-capped worker pool and sorts
//! the collected open ports before reporting, preserving the ascending-order
//! contract.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portprobe::scanner::run_scan;
//! use portprobe::types::{PortRange, ScanConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let range = PortRange::new(1, 1024).unwrap();
//!     let config = ScanConfig::new("127.0.0.1", range)
//!         .with_timeout(Duration::from_millis(300));
//!
//!     let report = run_scan(&config).await;
//!     println!("open: {:?}", report.open_ports);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated port ranges and the immutable scan configuration
//! - [`scanner`] - The TCP probe and the scan driver
//! - [`error`] - Fatal configuration errors
//! - [`output`] - Progress markers and the summary line
//! - [`cli`] - Command-line argument definitions

pub mod cli;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::ConfigError;
pub use scanner::{run_scan, PortOutcome, ScanReport, TcpProbe};
pub use types::{PortRange, ScanConfig};
