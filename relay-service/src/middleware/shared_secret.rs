use crate::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use service_core::utils::secret::secrets_match;

/// Header game servers use to present the shared secret.
pub const SHARED_SECRET_HEADER: &str = "x-roblox-secret";

/// Reject requests that do not carry the configured shared secret.
///
/// Runs before the body is read, so unauthenticated callers never reach
/// body parsing or validation.
pub async fn shared_secret_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = headers
        .get(SHARED_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let expected = state.config.security.shared_secret.expose_secret();

    if presented.is_empty() || !secrets_match(expected, presented) {
        tracing::warn!(
            header_present = !presented.is_empty(),
            "Rejected request with invalid shared secret"
        );
        return Err(AppError::Unauthorized(anyhow::anyhow!("Unauthorized")));
    }

    Ok(next.run(request).await)
}
