use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;

// 在这里定义快照数据结构，和为 SSID 探测与前端资源定义的 trait。

/// One best-effort reading of the host's network state, assembled per request.
///
/// Every field is independently optional-on-failure: a probe that failed is
/// represented by its sentinel value (`"Unknown"` / `"Unsupported OS"` for
/// the SSID, `0.0` for throughput, `-1.0` for latency) instead of an error.
/// The fields are measured sequentially, so they may reflect slightly
/// different instants.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStatusSnapshot {
    pub ssid: String,
    pub download_mbps: f64,
    pub upload_mbps: f64,
    pub latency_ms: f64,
    pub total_usage_gb: f64,
    pub measured_at: DateTime<Utc>,
}

/// A platform strategy that can report the currently associated SSID.
///
/// Implementations wrap one native tool (`netsh`, `nmcli`, ...) and are
/// selected once at startup by the factory; request handlers never re-detect
/// the platform. Probes report failure through `Result` — the sentinel
/// conversion happens at the facade boundary, not here.
#[async_trait]
pub trait SsidProbe: Send + Sync {
    /// Name of the underlying tool, for logs.
    fn tool(&self) -> &'static str;

    /// The SSID the host is currently associated with.
    async fn active_ssid(&self) -> crate::Result<String>;
}

/// 前端资源提供者接口。
#[async_trait]
pub trait UiAssetProvider: Send + Sync {
    /// Retrieves a single UI asset.
    ///
    /// # Arguments
    /// * `path` - The path to the asset (e.g., "index.html", "style.css").
    ///
    /// # Returns
    /// A `Result` containing a tuple of (`Cow<'static, [u8]>`, `String`)
    /// representing the asset's content and its MIME type, or an `Error` if not found.
    /// 获取单个 UI 资源。
    async fn get_asset(&self, path: &str) -> crate::Result<(Cow<'static, [u8]>, String)>;
}
