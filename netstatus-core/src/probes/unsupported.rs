use async_trait::async_trait;

use crate::traits::SsidProbe;
use crate::{Error, Result};

/// Stands in on hosts that have neither `netsh` nor `nmcli`. Reports the
/// platform classification as its failure cause without ever spawning a
/// subprocess; the facade maps it to the `"Unsupported OS"` sentinel.
#[derive(Debug, Default)]
pub struct UnsupportedProbe;

impl UnsupportedProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SsidProbe for UnsupportedProbe {
    fn tool(&self) -> &'static str {
        "none"
    }

    async fn active_ssid(&self) -> Result<String> {
        Err(Error::UnsupportedPlatform)
    }
}
