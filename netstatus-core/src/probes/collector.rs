use chrono::Utc;
use std::sync::Arc;

use super::latency::LatencyProbe;
use super::throughput::ThroughputProbe;
use super::usage::UsageProbe;
use super::{SSID_UNKNOWN, SSID_UNSUPPORTED};
use crate::traits::{NetworkStatusSnapshot, SsidProbe};

/// Gathers every probe into one best-effort snapshot.
///
/// The probes run sequentially and each failure is isolated: it is logged,
/// replaced by that probe's sentinel value, and the remaining probes still
/// run. Nothing here returns an error to the request handler.
pub struct StatusCollector {
    ssid: Arc<dyn SsidProbe>,
    latency: LatencyProbe,
    throughput: ThroughputProbe,
    usage: UsageProbe,
}

impl StatusCollector {
    pub fn new(
        ssid: Arc<dyn SsidProbe>,
        latency: LatencyProbe,
        throughput: ThroughputProbe,
        usage: UsageProbe,
    ) -> Self {
        Self { ssid, latency, throughput, usage }
    }

    /// SSID with the sentinel boundary applied: `"Unsupported OS"` when the
    /// platform has no probe tool, `"Unknown"` for every other failure.
    pub async fn connected_ssid(&self) -> String {
        match self.ssid.active_ssid().await {
            Ok(ssid) => ssid,
            Err(crate::Error::UnsupportedPlatform) => SSID_UNSUPPORTED.to_string(),
            Err(err) => {
                tracing::warn!(tool = self.ssid.tool(), %err, "SSID probe failed");
                SSID_UNKNOWN.to_string()
            }
        }
    }

    pub async fn latency_ms(&self) -> f64 {
        self.latency.measure_or_sentinel().await
    }

    pub async fn throughput_mbps(&self) -> (f64, f64) {
        self.throughput.measure_or_sentinel().await
    }

    pub fn usage_gb(&self) -> f64 {
        self.usage.read_gb()
    }

    /// One full reading. The fields observe slightly different instants;
    /// the snapshot makes no atomicity claim across them.
    pub async fn snapshot(&self) -> NetworkStatusSnapshot {
        let ssid = self.connected_ssid().await;
        let (download_mbps, upload_mbps) = self.throughput_mbps().await;
        let latency_ms = self.latency_ms().await;
        let total_usage_gb = self.usage_gb();

        NetworkStatusSnapshot {
            ssid,
            download_mbps,
            upload_mbps,
            latency_ms,
            total_usage_gb,
            measured_at: Utc::now(),
        }
    }

    /// Live download re-samples for the speed chart. A failed sample charts
    /// as a flat zero point.
    pub async fn sample_download_mbps(&self, samples: usize) -> Vec<f64> {
        let mut points = Vec::with_capacity(samples);
        for _ in 0..samples {
            let (download, _) = self.throughput_mbps().await;
            points.push(download);
        }
        points
    }
}
