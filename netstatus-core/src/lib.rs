//! Core library for the Wi-Fi status dashboard.
//! This crate defines the probe facade that turns heterogeneous external
//! signals (OS Wi-Fi tooling, ping, a throughput measurement tool, kernel
//! byte counters) into one consistent status snapshot, plus the stores and
//! the web server that expose it. Frontend asset delivery is selectable by
//! feature flag.

pub mod allowlist;
pub mod chart;
pub mod config;
pub mod factory;
pub mod frontends;
pub mod probes;
pub mod registry;
pub mod traits;
pub mod web_server;

// Define a shared Error and Result type for the entire crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("command failed: {0}")]
    CommandFailed(String),

    #[error("unparsable tool output: {0}")]
    Unparsable(String),

    #[error("probe timed out after {0:?}")]
    ProbeTimeout(std::time::Duration),

    #[error("platform cannot report Wi-Fi status")]
    UnsupportedPlatform,

    #[error("web server error: {0}")]
    WebServer(#[from] axum::BoxError),

    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),
}

/// A specialized `Result` type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;
