//! Service meta endpoints: liveness banner, version and health.

use std::time::Duration;

use axum::{Json, Router, extract::State, routing::get};
use chrono::{SecondsFormat, Utc};
use mongodb::Client;
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// API version reported by `/version`.
pub const API_VERSION: &str = "1.1";

/// Upper bound on the `/health` ping; the driver's own server selection
/// timeout is far longer.
pub const HEALTH_PING_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionResponse {
    version: &'static str,
    updated_at: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime: f64,
    database: &'static str,
}

/// Router for `/`, `/version` and `/health`, mounted at the root.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/version", get(version))
        .route("/health", get(health))
        .with_state(state)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API is running",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: API_VERSION,
        updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Always 200; `database` reflects a live ping through the shared client.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = ping(&state.mongo_client, HEALTH_PING_TIMEOUT).await;

    Json(HealthResponse {
        status: "ok",
        uptime: state.started_at.elapsed().as_secs_f64(),
        database: if connected {
            "connected"
        } else {
            "not connected"
        },
    })
}

/// Live ping, reported as not connected once `limit` elapses.
async fn ping(client: &Client, limit: Duration) -> bool {
    match tokio::time::timeout(limit, database::mongodb::check_health(client)).await {
        Ok(connected) => connected,
        Err(_) => {
            warn!(?limit, "MongoDB health ping timed out");
            false
        }
    }
}
