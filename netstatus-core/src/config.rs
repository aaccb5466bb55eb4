use once_cell::sync::Lazy;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Built-in deployment config, compiled into the binary the same way the UI
/// bundle is.
pub static CONFIG: Lazy<DashboardConfig> = Lazy::new(|| {
    const CONFIG_TOML: &str = include_str!("../../configs/netstatus.toml");
    dashboard_config_from_toml_str(CONFIG_TOML)
});

#[derive(Deserialize)]
struct DashboardConfigFile {
    bind_addr: String,
    ping_target: String,
    probe_timeout_secs: u64,
    speedtest_command: String,
    speedtest_timeout_secs: u64,
    chart_samples: usize,
    database_path: String,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub bind_addr: SocketAddr,
    pub ping_target: String,
    /// Deadline for the quick probes (netsh/nmcli/ping).
    pub probe_timeout: Duration,
    pub speedtest_command: String,
    /// The speed test moves real traffic and gets a much longer leash.
    pub speedtest_timeout: Duration,
    pub chart_samples: usize,
    pub database_path: PathBuf,
}

impl DashboardConfig {
    /// `NETSTATUS_PORT` wins over the baked-in port; hosting platforms
    /// inject it.
    pub fn bind_addr_with_env(&self) -> SocketAddr {
        match std::env::var("NETSTATUS_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
        {
            Some(port) => SocketAddr::new(self.bind_addr.ip(), port),
            None => self.bind_addr,
        }
    }
}

impl From<DashboardConfigFile> for DashboardConfig {
    fn from(t: DashboardConfigFile) -> Self {
        let bind_addr =
            SocketAddr::from_str(&t.bind_addr).expect("Invalid bind_addr in TOML");
        DashboardConfig {
            bind_addr,
            ping_target: t.ping_target,
            probe_timeout: Duration::from_secs(t.probe_timeout_secs),
            speedtest_command: t.speedtest_command,
            speedtest_timeout: Duration::from_secs(t.speedtest_timeout_secs),
            chart_samples: t.chart_samples,
            database_path: PathBuf::from(t.database_path),
        }
    }
}

pub fn dashboard_config_from_toml_str(s: &str) -> DashboardConfig {
    let parsed: DashboardConfigFile =
        toml::from_str(s).expect("Failed to parse dashboard config TOML");
    DashboardConfig::from(parsed)
}
