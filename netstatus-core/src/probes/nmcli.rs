use async_trait::async_trait;
use std::time::Duration;

use crate::traits::SsidProbe;
use crate::{Error, Result};

// Linux 上通过 nmcli 查询当前关联的无线网络，适用于使用
// NetworkManager 管理网络连接的系统。

/// Scans the terse `active:ssid` listing and returns the SSID of the first
/// row whose active flag is `yes`. Later `yes` rows (multiple interfaces)
/// are ignored.
pub(crate) fn parse_active_listing(output: &str) -> Result<String> {
    for line in output.lines() {
        let Some((active, ssid)) = line.split_once(':') else {
            continue;
        };
        if active != "yes" {
            continue;
        }
        if ssid.is_empty() {
            return Err(Error::Unparsable("active nmcli row has no SSID".into()));
        }
        return Ok(ssid.to_string());
    }
    Err(Error::Unparsable("no active row in nmcli listing".into()))
}

/// SSID probe for Linux hosts, backed by
/// `nmcli -t -f active,ssid device wifi list`.
#[derive(Debug)]
pub struct NmcliProbe {
    timeout: Duration,
}

impl NmcliProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl SsidProbe for NmcliProbe {
    fn tool(&self) -> &'static str {
        "nmcli"
    }

    async fn active_ssid(&self) -> Result<String> {
        let stdout = super::run_tool(
            "nmcli",
            &["-t", "-f", "active,ssid", "device", "wifi", "list"],
            self.timeout,
        )
        .await?;
        parse_active_listing(&stdout)
    }
}
