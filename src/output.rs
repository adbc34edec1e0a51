//! Output formatting.
//!
//! The stdout protocol is deliberately terse: one marker character per
//! probed port during the scan, flushed as each outcome resolves, then a
//! newline and a single summary line. Diagnostics and fatal errors go to
//! stderr so the marker stream stays clean.

use console::style;
use std::io::{self, Write};

/// Write one progress marker and flush so it appears as the outcome resolves.
pub fn emit_marker(marker: char) {
    let mut out = io::stdout().lock();
    let _ = write!(out, "{marker}");
    let _ = out.flush();
}

/// Format the final summary: `<N> <port|ports> are opened`, where `<N>` is
/// `0` or the comma-joined list of open ports, and the noun is singular iff
/// exactly one port is open.
pub fn format_summary(open_ports: &[u16]) -> String {
    let list = if open_ports.is_empty() {
        "0".to_string()
    } else {
        open_ports
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(",")
    };
    let noun = if open_ports.len() == 1 {
        "port"
    } else {
        "ports"
    };
    format!("{list} {noun} are opened")
}

/// Terminate the marker stream and print the summary line.
pub fn print_summary(open_ports: &[u16]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    writeln!(out, "{}", format_summary(open_ports))?;
    out.flush()
}

/// Print a fatal error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("error:").red().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_no_open_ports() {
        assert_eq!(format_summary(&[]), "0 ports are opened");
    }

    #[test]
    fn test_summary_single_port_is_singular() {
        assert_eq!(format_summary(&[8080]), "8080 port are opened");
    }

    #[test]
    fn test_summary_multiple_ports_comma_joined() {
        assert_eq!(format_summary(&[22, 80, 443]), "22,80,443 ports are opened");
    }
}
