use anyhow::Context;
use std::sync::Arc;

use netstatus_core::allowlist::AllowList;
use netstatus_core::config::DashboardConfig;
use netstatus_core::factory;
use netstatus_core::probes::OsFamily;
use netstatus_core::probes::collector::StatusCollector;
use netstatus_core::probes::latency::LatencyProbe;
use netstatus_core::probes::throughput::ThroughputProbe;
use netstatus_core::probes::usage::UsageProbe;
use netstatus_core::registry::RegistrationStore;
use netstatus_core::web_server::{AppState, start_web_server};

/// Wires the probes, the stores and the frontend together, then runs the
/// web server until it exits.
pub async fn run_dashboard(config: DashboardConfig) -> anyhow::Result<()> {
    let ssid_probe = factory::create_ssid_probe(&config);
    let frontend = factory::create_frontend();

    let collector = StatusCollector::new(
        ssid_probe,
        LatencyProbe::new(config.ping_target.clone(), OsFamily::detect(), config.probe_timeout),
        ThroughputProbe::new(config.speedtest_command.clone(), config.speedtest_timeout),
        UsageProbe::new(),
    );

    let registry = RegistrationStore::open(&config.database_path)
        .context("opening the registration database")?;

    let state = Arc::new(AppState {
        collector,
        allow_list: AllowList::new(),
        registry,
        frontend,
        chart_samples: config.chart_samples,
    });

    let addr = config.bind_addr_with_env();
    start_web_server(state, addr).await??;
    Ok(())
}
