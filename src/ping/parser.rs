//! Ping output parsing.
//!
//! Extracts packet loss and average round-trip time from the free-form text
//! the ping utility prints. Both the Windows and Unix output dialects are
//! recognized; anything else simply yields unset statistics.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Statistics extracted from ping output.
///
/// A field is `None` when no recognized pattern matched, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PingStats {
    /// Packet loss percentage.
    pub packet_loss: Option<f64>,
    /// Average round-trip time in milliseconds.
    pub avg_rtt_ms: Option<f64>,
}

/// Parse ping output into statistics.
///
/// Pure and infallible: malformed input leaves the fields unset.
pub fn parse_ping_output(output: &str) -> PingStats {
    PingStats {
        packet_loss: parse_packet_loss(output),
        avg_rtt_ms: parse_avg_rtt(output),
    }
}

/// Percentage immediately preceding a "loss" token.
///
/// The first pattern covers "NN% loss" (Windows), the second "NN% packet
/// loss" (Unix, decimals allowed). The second overlaps the first for integer
/// percentages; both are kept for dialect coverage. First match wins.
fn parse_packet_loss(output: &str) -> Option<f64> {
    static LOSS: OnceLock<Regex> = OnceLock::new();
    static PACKET_LOSS: OnceLock<Regex> = OnceLock::new();

    let loss =
        LOSS.get_or_init(|| Regex::new(r"(\d+)%\s*loss").expect("failed to compile loss regex"));
    let packet_loss = PACKET_LOSS.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)% packet loss").expect("failed to compile packet loss regex")
    });

    loss.captures(output)
        .or_else(|| packet_loss.captures(output))
        .and_then(|caps| caps[1].parse().ok())
}

/// Average round-trip time in milliseconds.
///
/// Windows prints a literal "Average = Nms"; Unix prints a
/// "min/avg/max/mdev" summary where the second field is the average.
fn parse_avg_rtt(output: &str) -> Option<f64> {
    static WINDOWS_AVG: OnceLock<Regex> = OnceLock::new();
    static UNIX_AVG: OnceLock<Regex> = OnceLock::new();

    let windows_avg = WINDOWS_AVG.get_or_init(|| {
        Regex::new(r"Average = (\d+)ms").expect("failed to compile Windows average regex")
    });
    let unix_avg = UNIX_AVG.get_or_init(|| {
        Regex::new(r"= [\d.]+/([\d.]+)/[\d.]+/[\d.]+ ms")
            .expect("failed to compile Unix average regex")
    });

    windows_avg
        .captures(output)
        .or_else(|| unix_avg.captures(output))
        .and_then(|caps| caps[1].parse().ok())
}
