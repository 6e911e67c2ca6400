//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::Uri, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::error::ApiError;
use crate::config::Config;

/// Greeting served from `/`.
pub const GREETING: &str = "Hello from Flask CI/CD!";

/// Process-wide state shared with handlers. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ServiceState {
    inner: Arc<StateInner>,
}

#[derive(Debug)]
struct StateInner {
    version: String,
    start_time: DateTime<Utc>,
    started: Instant,
}

impl ServiceState {
    /// Create state for the given version, stamping the start time now.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(StateInner {
                version: version.into(),
                start_time: Utc::now(),
                started: Instant::now(),
            }),
        }
    }

    /// Create state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app_version.clone())
    }

    /// Reported service version.
    pub fn version(&self) -> &str {
        &self.inner.version
    }

    /// Wall-clock time the state was created.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.inner.start_time
    }

    /// Seconds since start, measured on the monotonic clock.
    pub fn uptime_seconds(&self) -> f64 {
        self.inner.started.elapsed().as_secs_f64()
    }
}

/// RFC 3339 in UTC with an explicit `+00:00` offset.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
    /// Time of the request.
    pub timestamp: String,
    /// Service version.
    pub version: String,
}

/// Readiness response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Always "ready".
    pub status: &'static str,
    /// Time of the request.
    pub timestamp: String,
    /// Seconds since start.
    pub uptime_seconds: f64,
}

/// Metrics response.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Seconds since start.
    pub uptime_seconds: f64,
    /// Service version.
    pub version: String,
    /// Time the service started.
    pub start_time: String,
}

/// Home handler - plain-text greeting.
pub async fn home() -> &'static str {
    info!("Home endpoint accessed");
    GREETING
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<ServiceState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: iso_timestamp(Utc::now()),
        version: state.version().to_string(),
    })
}

/// Readiness check handler. There are no dependencies to check, so the
/// service is ready as soon as it is serving.
pub async fn ready(State(state): State<ServiceState>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        timestamp: iso_timestamp(Utc::now()),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Metrics handler - uptime and version as JSON.
pub async fn metrics(State(state): State<ServiceState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        uptime_seconds: state.uptime_seconds(),
        version: state.version().to_string(),
        start_time: iso_timestamp(state.start_time()),
    })
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> ApiError {
    warn!(%uri, "404 error: no route matched");
    ApiError::NotFound
}
