use relay_service::config::{RelayConfig, TelemetryConfig};
use relay_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing before validating secrets so startup failures are logged
    let telemetry = TelemetryConfig::from_env();
    init_tracing(
        &telemetry.service_name,
        &telemetry.log_level,
        telemetry.otlp_endpoint.as_deref(),
    );

    let config = RelayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    tracing::info!(
        service = %config.telemetry.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting relay service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
