use serde::Deserialize;
use std::time::Duration;

use crate::{Error, Result};

/// The slice of the `speedtest-cli --json` report the dashboard reads.
/// Rates are bits per second; server selection and the measurement protocol
/// are the tool's business.
#[derive(Debug, Deserialize)]
struct SpeedtestReport {
    download: f64,
    upload: f64,
}

/// Mbps with the two decimals the dashboard displays.
fn to_mbps(bits_per_second: f64) -> f64 {
    (bits_per_second / 1_000_000.0 * 100.0).round() / 100.0
}

/// Measures download/upload rates by delegating to an external speed-test
/// tool.
///
/// On any failure the pair reads `(0.0, 0.0)` — indistinguishable from a
/// genuinely idle link. The log carries the difference.
#[derive(Debug)]
pub struct ThroughputProbe {
    command: String,
    timeout: Duration,
}

impl ThroughputProbe {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self { command: command.into(), timeout }
    }

    pub async fn measure(&self) -> Result<(f64, f64)> {
        let stdout = super::run_tool(&self.command, &["--json"], self.timeout).await?;
        let report: SpeedtestReport = serde_json::from_str(&stdout)
            .map_err(|err| Error::Unparsable(format!("speed-test report: {err}")))?;
        Ok((to_mbps(report.download), to_mbps(report.upload)))
    }

    pub async fn measure_or_sentinel(&self) -> (f64, f64) {
        match self.measure().await {
            Ok(rates) => rates,
            Err(err) => {
                tracing::warn!(command = %self.command, %err, "throughput probe failed");
                (0.0, 0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_bits_per_second_to_rounded_mbps() {
        assert_eq!(to_mbps(93_527_341.0), 93.53);
        assert_eq!(to_mbps(1_000_000.0), 1.0);
        assert_eq!(to_mbps(0.0), 0.0);
        assert_eq!(to_mbps(12_344_999.0), 12.34);
    }

    #[test]
    fn reads_the_rates_out_of_a_report() {
        let raw = r#"{
            "download": 93527341.02,
            "upload": 11234567.8,
            "ping": 14.2,
            "server": {"host": "example.net:8080", "country": "DE"},
            "bytes_sent": 14680064,
            "bytes_received": 120586240
        }"#;
        let report: SpeedtestReport = serde_json::from_str(raw).unwrap();
        assert_eq!(to_mbps(report.download), 93.53);
        assert_eq!(to_mbps(report.upload), 11.23);
    }

    #[tokio::test]
    async fn a_missing_tool_reads_zero_zero() {
        let probe = ThroughputProbe::new("speedtest-cli-not-on-this-box", Duration::from_secs(2));
        assert_eq!(probe.measure_or_sentinel().await, (0.0, 0.0));
    }
}
