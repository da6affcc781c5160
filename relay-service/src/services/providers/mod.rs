//! Upstream text-generation providers.
//!
//! Handlers talk to a [`TextProvider`] so the Gemini client can be swapped
//! for the mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { body, .. } => AppError::UpstreamError(body),
            other => AppError::InternalError(anyhow::Error::new(other)),
        }
    }
}

/// Trait for single-turn text generation backends.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send a prompt and return the raw upstream response document.
    async fn generate(&self, prompt: &str) -> Result<Value, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
