use crate::dtos::{MessageRequest, ReplyResponse};
use crate::services::providers::ProviderError;
use crate::services::{build_prompt, extract_reply};
use crate::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

/// Relay one player message to the model and return its reply.
pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReplyResponse>, AppError> {
    let message = MessageRequest::from_body(&body)?.validate()?;
    let prompt = build_prompt(&message);

    let data = state
        .text_provider
        .generate(&prompt)
        .await
        .map_err(|e| {
            match &e {
                ProviderError::Upstream { status, body } => {
                    tracing::error!(status = *status, body = %body, "Model request failed");
                }
                other => tracing::error!(error = %other, "Model request error"),
            }
            AppError::from(e)
        })?;

    let reply = extract_reply(&data);

    tracing::info!(
        player_id = %message.player_id,
        reply_len = reply.chars().count(),
        "Relayed model reply"
    );

    Ok(Json(ReplyResponse { reply }))
}
