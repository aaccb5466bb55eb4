use crate::config::DashboardConfig;
use crate::traits::{SsidProbe, UiAssetProvider};
use std::sync::Arc;

/// Picks the SSID strategy once at startup; request handlers never
/// re-detect the platform.
#[cfg(not(feature = "probe_mock"))]
pub fn create_ssid_probe(config: &DashboardConfig) -> Arc<dyn SsidProbe> {
    use crate::probes::OsFamily;

    match OsFamily::detect() {
        OsFamily::Windows => {
            tracing::info!("SSID probe: netsh");
            Arc::new(crate::probes::netsh::NetshProbe::new(config.probe_timeout))
        }
        OsFamily::Linux => {
            tracing::info!("SSID probe: nmcli");
            Arc::new(crate::probes::nmcli::NmcliProbe::new(config.probe_timeout))
        }
        OsFamily::Unsupported => {
            tracing::warn!(os = std::env::consts::OS, "no SSID probe for this platform");
            Arc::new(crate::probes::unsupported::UnsupportedProbe::new())
        }
    }
}

#[cfg(feature = "probe_mock")]
pub fn create_ssid_probe(_config: &DashboardConfig) -> Arc<dyn SsidProbe> {
    tracing::info!("SSID probe: mock");
    Arc::new(crate::probes::mock::MockProbe::default())
}

pub fn create_frontend() -> Arc<dyn UiAssetProvider> {
    #[cfg(feature = "frontend_disk")]
    {
        tracing::info!("frontend: disk provider (for local development)");
        Arc::new(crate::frontends::disk_frontend::DiskFrontend::new(
            "netstatus-core/ui",
        ))
    }
    #[cfg(not(feature = "frontend_disk"))]
    {
        tracing::info!("frontend: embedded bundle (for deployment)");
        Arc::new(crate::frontends::embed_frontend::EmbedFrontend::new())
    }
}
