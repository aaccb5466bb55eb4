use async_trait::async_trait;

use crate::traits::SsidProbe;
use crate::{Error, Result};

/// A canned SSID probe for tests and for UI development on machines without
/// real Wi-Fi tooling.
#[derive(Debug)]
pub struct MockProbe {
    ssid: Option<String>,
}

impl MockProbe {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self { ssid: Some(ssid.into()) }
    }

    /// A probe that fails every reading, for exercising the sentinel path.
    pub fn failing() -> Self {
        Self { ssid: None }
    }
}

impl Default for MockProbe {
    fn default() -> Self {
        Self::new("MockNet")
    }
}

#[async_trait]
impl SsidProbe for MockProbe {
    fn tool(&self) -> &'static str {
        "mock"
    }

    async fn active_ssid(&self) -> Result<String> {
        self.ssid
            .clone()
            .ok_or_else(|| Error::CommandFailed("mock probe configured to fail".into()))
    }
}
