use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

use super::OsFamily;
use crate::{Error, Result};

/// Sentinel for a latency probe that failed or produced unreadable output.
pub const LATENCY_FAILED_MS: f64 = -1.0;

// `ping` reports round-trips as `time=14.2 ms` per reply on POSIX systems
// and as `Average = 23ms` in the Windows summary line.
static POSIX_RTT: Lazy<Regex> = Lazy::new(|| Regex::new(r"time=(\d+\.?\d*)").unwrap());
static WINDOWS_RTT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Average = (\d+)ms").unwrap());

/// Accepts either output format; the per-reply `time=` form is tried first.
pub(crate) fn parse_ping_output(output: &str) -> Result<f64> {
    let caps = POSIX_RTT
        .captures(output)
        .or_else(|| WINDOWS_RTT.captures(output))
        .ok_or_else(|| Error::Unparsable("no round-trip time in ping output".into()))?;
    caps[1]
        .parse::<f64>()
        .map_err(|_| Error::Unparsable(format!("bad round-trip figure: {}", &caps[1])))
}

/// Sends a single ICMP echo to a fixed target via the OS ping utility.
///
/// Exactly one attempt per call — no retry and no averaging over multiple
/// packets. Packet loss, blocked ICMP and an unreachable host all read the
/// same: a failed probe.
#[derive(Debug)]
pub struct LatencyProbe {
    target: String,
    os: OsFamily,
    timeout: Duration,
}

impl LatencyProbe {
    pub fn new(target: impl Into<String>, os: OsFamily, timeout: Duration) -> Self {
        Self { target: target.into(), os, timeout }
    }

    pub async fn measure(&self) -> Result<f64> {
        let stdout = match self.os {
            OsFamily::Windows => {
                super::run_tool("ping", &[&self.target, "-n", "1"], self.timeout).await?
            }
            _ => super::run_tool("ping", &["-c", "1", &self.target], self.timeout).await?,
        };
        parse_ping_output(&stdout)
    }

    /// Sentinel boundary: the cause goes to the log, the caller gets `-1.0`.
    pub async fn measure_or_sentinel(&self) -> f64 {
        match self.measure().await {
            Ok(ms) => ms,
            Err(err) => {
                tracing::warn!(host = %self.target, %err, "latency probe failed");
                LATENCY_FAILED_MS
            }
        }
    }
}
