use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::error::AppError;

use crate::utils::{is_truthy, render_text};

/// Inbound chat message as posted by the game server.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[serde(default)]
    pub player_id: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
}

/// A message that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMessage {
    pub player_id: String,
    pub message: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
}

impl MessageRequest {
    /// Parse a raw request body. An empty body is an empty object.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Rejected malformed JSON body");
            invalid_body()
        })?;

        if !value.is_object() {
            return Err(invalid_body());
        }

        serde_json::from_value(value).map_err(|_| invalid_body())
    }

    pub fn validate(self) -> Result<ValidatedMessage, AppError> {
        let player_id = self.player_id.filter(is_truthy);
        let message = self.message.filter(is_truthy);

        match (player_id, message) {
            (Some(player_id), Some(message)) => Ok(ValidatedMessage {
                player_id: render_text(&player_id),
                message: render_text(&message),
                context: self.context.filter(is_truthy).map(|c| render_text(&c)),
            }),
            _ => Err(AppError::BadRequest(anyhow::anyhow!(
                "playerId and message are required"
            ))),
        }
    }
}

fn invalid_body() -> AppError {
    AppError::BadRequest(anyhow::anyhow!("Invalid JSON body"))
}
