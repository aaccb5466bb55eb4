//! End-to-end checks of the snapshot facade's failure isolation: every probe
//! failing at once must still yield a fully populated snapshot.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use netstatus_core::probes::OsFamily;
use netstatus_core::probes::collector::StatusCollector;
use netstatus_core::probes::latency::{LATENCY_FAILED_MS, LatencyProbe};
use netstatus_core::probes::mock::MockProbe;
use netstatus_core::probes::throughput::ThroughputProbe;
use netstatus_core::probes::unsupported::UnsupportedProbe;
use netstatus_core::probes::usage::UsageProbe;

fn all_failing_collector() -> StatusCollector {
    StatusCollector::new(
        Arc::new(MockProbe::failing()),
        LatencyProbe::new("host.invalid", OsFamily::Linux, Duration::from_secs(2)),
        ThroughputProbe::new("speedtest-cli-not-on-this-box", Duration::from_secs(2)),
        UsageProbe::new(),
    )
}

#[tokio::test]
async fn every_probe_failing_still_yields_a_full_snapshot() {
    let before = Utc::now();
    let snapshot = all_failing_collector().snapshot().await;

    assert_eq!(snapshot.ssid, "Unknown");
    assert_eq!(snapshot.download_mbps, 0.0);
    assert_eq!(snapshot.upload_mbps, 0.0);
    assert_eq!(snapshot.latency_ms, LATENCY_FAILED_MS);
    assert!(snapshot.total_usage_gb >= 0.0);
    assert!(snapshot.measured_at >= before);
}

#[tokio::test]
async fn a_working_ssid_probe_is_not_dragged_down_by_the_others() {
    let collector = StatusCollector::new(
        Arc::new(MockProbe::new("HomeNet")),
        LatencyProbe::new("host.invalid", OsFamily::Linux, Duration::from_secs(2)),
        ThroughputProbe::new("speedtest-cli-not-on-this-box", Duration::from_secs(2)),
        UsageProbe::new(),
    );
    let snapshot = collector.snapshot().await;

    assert_eq!(snapshot.ssid, "HomeNet");
    assert_eq!(snapshot.download_mbps, 0.0);
    assert_eq!(snapshot.latency_ms, LATENCY_FAILED_MS);
}

#[tokio::test]
async fn an_unsupported_platform_reads_its_own_sentinel() {
    let collector = StatusCollector::new(
        Arc::new(UnsupportedProbe::new()),
        LatencyProbe::new("host.invalid", OsFamily::Unsupported, Duration::from_secs(2)),
        ThroughputProbe::new("speedtest-cli-not-on-this-box", Duration::from_secs(2)),
        UsageProbe::new(),
    );
    assert_eq!(collector.connected_ssid().await, "Unsupported OS");
}

#[tokio::test]
async fn chart_sampling_turns_failures_into_flat_zero_points() {
    let samples = all_failing_collector().sample_download_mbps(5).await;
    assert_eq!(samples, vec![0.0; 5]);
}

#[tokio::test]
async fn the_snapshot_serializes_for_the_status_endpoint() {
    let snapshot = all_failing_collector().snapshot().await;
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["ssid"], "Unknown");
    assert_eq!(json["latency_ms"], -1.0);
    assert!(json["measured_at"].is_string());
}
