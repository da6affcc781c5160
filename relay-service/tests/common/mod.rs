//! Test helpers for relay-service integration tests.

#![allow(dead_code)]

use relay_service::config::{GeminiSettings, RelayConfig, SecurityConfig, TelemetryConfig};
use relay_service::services::providers::TextProvider;
use relay_service::{build_router, AppState};
use secrecy::SecretString;
use service_core::config::Config;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-shared-secret";
pub const TEST_API_KEY: &str = "test-api-key";

/// Configuration pointing the Gemini client at `api_base`.
pub fn test_config(api_base: &str) -> RelayConfig {
    RelayConfig {
        common: Config { port: 0 },
        telemetry: TelemetryConfig {
            service_name: "relay-service-test".to_string(),
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
        gemini: GeminiSettings {
            api_key: SecretString::new(TEST_API_KEY.to_string()),
            model: "gemini-2.5-flash".to_string(),
            api_base: api_base.to_string(),
            timeout_seconds: 5,
        },
        security: SecurityConfig {
            shared_secret: SecretString::new(TEST_SECRET.to_string()),
        },
    }
}

/// Router backed by the given provider.
pub fn test_router(provider: Arc<dyn TextProvider>) -> axum::Router {
    build_router(AppState::new(test_config("http://127.0.0.1:9"), provider))
}
