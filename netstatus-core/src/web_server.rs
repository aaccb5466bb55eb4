use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::allowlist::AllowList;
use crate::chart::SpeedChart;
use crate::probes::collector::StatusCollector;
use crate::registry::{RegisteredNetwork, RegistrationStore};
use crate::traits::{NetworkStatusSnapshot, UiAssetProvider};

// The shared state for our web server.
// By using `Arc<dyn Trait>` for the probe and the frontend, we can inject
// any implementation that satisfies the trait bounds.
pub type WebServerState = State<Arc<AppState>>;

pub struct AppState {
    pub collector: StatusCollector,
    pub allow_list: AllowList,
    pub registry: RegistrationStore,
    pub frontend: Arc<dyn UiAssetProvider>,
    pub chart_samples: usize,
}

/// Starts the Axum web server.
///
/// # Returns
/// A `JoinHandle` for the server task.
pub fn start_web_server(
    state: Arc<AppState>,
    addr: SocketAddr,
) -> JoinHandle<Result<(), crate::Error>> {
    let app = router(state);

    tracing::info!(%addr, "web server listening");

    tokio::spawn(async move {
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app.into_make_service())
            .await
            .map_err(|e| crate::Error::WebServer(e.into()))
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/status", get(api_status))
        .route("/api/ssid", get(api_ssid))
        .route("/api/latency", get(api_latency))
        .route("/api/speedtest", get(api_speedtest))
        .route("/api/chart.svg", get(api_chart))
        .route("/api/authorized", get(api_authorized_list).post(api_authorized_add))
        .route("/api/authorized/remove", post(api_authorized_remove))
        .route("/api/register", post(api_register))
        .route("/api/registered", get(api_registered))
        .route("/{*path}", get(serve_static_asset))
        .with_state(state)
}

// --- Route Handlers ---

/// Serves the main `index.html` file.
async fn serve_index(State(state): WebServerState) -> impl IntoResponse {
    serve_static_asset(State(state), Path("index.html".to_string())).await
}

/// Serves a static asset (e.g., CSS, JS) from the frontend provider.
async fn serve_static_asset(
    State(state): WebServerState,
    Path(path): Path<String>,
) -> impl IntoResponse {
    match state.frontend.get_asset(&path).await {
        Ok((data, mime)) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .body(Body::from(data))
            .unwrap(),
        Err(_) => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from(format!("Asset not found: {path}")))
            .unwrap(),
    }
}

/// The full snapshot. Probe failures surface as sentinel fields in the
/// payload, never as an HTTP error — a flaky subsystem must not break the
/// page load.
async fn api_status(State(state): WebServerState) -> Json<NetworkStatusSnapshot> {
    Json(state.collector.snapshot().await)
}

/// Single-value endpoint for client-side polling.
async fn api_ssid(State(state): WebServerState) -> Json<serde_json::Value> {
    let ssid = state.collector.connected_ssid().await;
    Json(serde_json::json!({ "ssid": ssid }))
}

/// Single-value endpoint for client-side polling.
async fn api_latency(State(state): WebServerState) -> Json<serde_json::Value> {
    let latency = state.collector.latency_ms().await;
    Json(serde_json::json!({ "latency": latency }))
}

async fn api_speedtest(State(state): WebServerState) -> Json<serde_json::Value> {
    let (download, upload) = state.collector.throughput_mbps().await;
    Json(serde_json::json!({ "download": download, "upload": upload }))
}

/// The speed-over-time strip: re-samples the throughput probe and plots the
/// result. Failed samples become flat-zero points.
async fn api_chart(State(state): WebServerState) -> Response {
    let samples = state.collector.sample_download_mbps(state.chart_samples).await;
    match SpeedChart::default().render_svg(&samples) {
        Ok(svg) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "image/svg+xml")
            .body(Body::from(svg))
            .unwrap(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub struct SsidPayload {
    ssid: String,
}

async fn api_authorized_list(State(state): WebServerState) -> Json<serde_json::Value> {
    let current = state.collector.connected_ssid().await;
    let authorized = state.allow_list.is_current_authorized(&current);
    Json(serde_json::json!({
        "networks": state.allow_list.entries(),
        "current_ssid": current,
        "authorized": authorized,
    }))
}

async fn api_authorized_add(
    State(state): WebServerState,
    Json(payload): Json<SsidPayload>,
) -> impl IntoResponse {
    let ssid = payload.ssid.trim();
    if ssid.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "ssid must not be empty" })),
        )
            .into_response();
    }
    let added = state.allow_list.add(ssid);
    (StatusCode::OK, Json(serde_json::json!({ "added": added }))).into_response()
}

async fn api_authorized_remove(
    State(state): WebServerState,
    Json(payload): Json<SsidPayload>,
) -> Json<serde_json::Value> {
    let removed = state.allow_list.remove(payload.ssid.trim());
    Json(serde_json::json!({ "removed": removed }))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    ssid: String,
    #[serde(default)]
    security: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    interval: String,
    #[serde(default)]
    brand: String,
}

/// Persists a registration record. The required fields mirror the form:
/// ssid, security and brand.
async fn api_register(
    State(state): WebServerState,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    if payload.ssid.is_empty() || payload.security.is_empty() || payload.brand.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "ssid, security and brand are required" })),
        )
            .into_response();
    }

    let record = RegisteredNetwork {
        ssid: payload.ssid,
        security: payload.security,
        password: payload.password,
        interval: payload.interval,
        brand: payload.brand,
        registered_at: Utc::now(),
    };

    match state.registry.insert(&record) {
        Ok(()) => {
            (StatusCode::OK, Json(serde_json::json!({ "status": "registered" }))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

async fn api_registered(State(state): WebServerState) -> impl IntoResponse {
    match state.registry.list() {
        Ok(networks) => (StatusCode::OK, Json(networks)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
