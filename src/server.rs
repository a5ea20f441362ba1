//! Web server module for Sonar.
//!
//! Provides the HTTP API: on-demand ping probes and a health endpoint.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::config::ProbeConfig;
use crate::ping::{self, PingError, PingStats, Platform};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub probe: ProbeConfig,
}

fn default_count() -> u32 {
    ping::DEFAULT_COUNT
}

/// Body of `POST /ping`.
#[derive(Debug, Deserialize)]
pub struct PingRequest {
    /// Hostname or IP literal to probe.
    pub target: String,

    /// Number of echo requests (default: 4).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Must be set to true; guards against accidental invocation.
    #[serde(default)]
    pub confirm: bool,
}

/// Result of one ping run.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub target: String,
    pub count: u32,
    /// Time the request was accepted, UTC.
    pub started_at: DateTime<Utc>,
    /// Full stdout of the ping utility.
    pub raw_output: String,
    pub stats: PingStats,
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    ping_available: bool,
}

/// JSON error body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Errors surfaced to HTTP callers.
#[derive(Debug)]
pub enum ApiError {
    /// Request rejected before any process was spawned.
    Validation(String),
    /// Ping pipeline failure.
    Ping(PingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::Ping(err @ PingError::Timeout(_)) => {
                (StatusCode::GATEWAY_TIMEOUT, err.to_string())
            }
            Self::Ping(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let app_state = Arc::new(state);

    Router::new()
        .route("/ping", post(ping_handler))
        .route("/health", get(health_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Run one ping probe and report raw plus parsed results.
async fn ping_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PingRequest>,
) -> Result<Json<PingResponse>, ApiError> {
    if !req.confirm {
        return Err(ApiError::Validation(
            "confirm must be set to true to run a ping".to_string(),
        ));
    }
    if req.target.trim().is_empty() {
        return Err(ApiError::Validation(
            "target must be a non-empty hostname or IP address".to_string(),
        ));
    }
    if req.count == 0 {
        return Err(ApiError::Validation(
            "count must be a positive integer".to_string(),
        ));
    }

    let started_at = Utc::now();
    let cmd = ping::ping_command(
        &state.probe.program,
        Platform::current(),
        &req.target,
        req.count,
    );

    tracing::info!(target = %req.target, count = req.count, "Running ping probe");

    let raw_output = ping::run_command(&cmd, state.probe.timeout)
        .await
        .map_err(|e| {
            tracing::warn!(target = %req.target, error = %e, "Ping probe failed");
            ApiError::Ping(e)
        })?;

    let stats = ping::parse_ping_output(&raw_output);

    tracing::debug!(
        target = %req.target,
        packet_loss = ?stats.packet_loss,
        avg_rtt_ms = ?stats.avg_rtt_ms,
        "Ping probe finished"
    );

    Ok(Json(PingResponse {
        target: req.target,
        count: req.count,
        started_at,
        raw_output,
        stats,
    }))
}

/// Liveness probe. Reports ping availability unconditionally.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        ping_available: true,
    })
}
