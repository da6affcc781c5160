pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    security_headers::security_headers_middleware, tracing::request_id_middleware,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::services::providers::TextProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub text_provider: Arc<dyn TextProvider>,
}

impl AppState {
    pub fn new(config: RelayConfig, text_provider: Arc<dyn TextProvider>) -> Self {
        Self {
            config: Arc::new(config),
            text_provider,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Only the relay route is gated; health routes stay open.
    let message_route = Router::new()
        .route("/message", post(handlers::message::send_message))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::shared_secret_middleware,
        ));

    Router::new()
        .route("/", get(handlers::health::banner))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .merge(message_route)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri().path(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}
