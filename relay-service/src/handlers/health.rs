use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const BANNER: &str = "Roblox AI proxy is running";

/// Plain-text banner on `/`.
pub async fn banner() -> &'static str {
    BANNER
}

/// Liveness check.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": state.config.telemetry.service_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check: the upstream provider must be reachable with our key.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.text_provider.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Provider readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
