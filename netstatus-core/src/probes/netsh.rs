use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

use crate::traits::SsidProbe;
use crate::{Error, Result};

// Windows 上通过 netsh 查询当前关联的无线网络。

/// Matches the `SSID : <name>` line of `netsh wlan show interfaces`.
/// The label must lead the line so the `BSSID :` row cannot match.
static SSID_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*SSID\s*:\s*(.+)$").unwrap());

pub(crate) fn parse_interface_listing(output: &str) -> Result<String> {
    let caps = SSID_LINE
        .captures(output)
        .ok_or_else(|| Error::Unparsable("no `SSID :` line in netsh interface listing".into()))?;
    let ssid = caps[1].trim();
    if ssid.is_empty() {
        return Err(Error::Unparsable("empty SSID in netsh interface listing".into()));
    }
    Ok(ssid.to_string())
}

/// SSID probe for the Windows family, backed by
/// `netsh wlan show interfaces`.
#[derive(Debug)]
pub struct NetshProbe {
    timeout: Duration,
}

impl NetshProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl SsidProbe for NetshProbe {
    fn tool(&self) -> &'static str {
        "netsh"
    }

    async fn active_ssid(&self) -> Result<String> {
        let stdout =
            super::run_tool("netsh", &["wlan", "show", "interfaces"], self.timeout).await?;
        parse_interface_listing(&stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERFACE_LISTING: &str = "\
There is 1 interface on the system:

    Name                   : Wi-Fi
    Description            : Intel(R) Wireless-AC 9560
    GUID                   : 8ab3c844-1ea6-4f6b-97ff-5cf9e1b83b4f
    Physical address       : d4:3b:04:4e:92:1a
    State                  : connected
    SSID                   : HomeNet 5G
    BSSID                  : 2c:96:82:11:7d:c0
    Network type           : Infrastructure
    Radio type             : 802.11ac
";

    #[test]
    fn extracts_the_ssid_line() {
        assert_eq!(parse_interface_listing(INTERFACE_LISTING).unwrap(), "HomeNet 5G");
    }

    #[test]
    fn the_bssid_line_does_not_match() {
        // Without the SSID row the BSSID row is the only `SSID :`-shaped text.
        let listing = "    State  : connected\n    BSSID  : 2c:96:82:11:7d:c0\n";
        assert!(parse_interface_listing(listing).is_err());
    }

    #[test]
    fn label_matching_is_case_insensitive_and_spacing_tolerant() {
        assert_eq!(parse_interface_listing("ssid:CafeGuest\n").unwrap(), "CafeGuest");
        assert_eq!(
            parse_interface_listing("  SSID      :   Trimmed Net   \n").unwrap(),
            "Trimmed Net"
        );
    }

    #[test]
    fn disconnected_listing_is_unparsable() {
        let listing = "    Name  : Wi-Fi\n    State : disconnected\n";
        assert!(matches!(
            parse_interface_listing(listing),
            Err(Error::Unparsable(_))
        ));
    }
}
