//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Mock text provider that returns a canned result and records prompts.
pub struct MockTextProvider {
    enabled: bool,
    response: Result<Value, ProviderError>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Reply with the given upstream document.
    pub fn replying(response: Value) -> Self {
        Self {
            enabled: true,
            response: Ok(response),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Reply with a Gemini-shaped document carrying `text`.
    pub fn with_text(text: &str) -> Self {
        Self::replying(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        }))
    }

    /// Fail every generation with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            enabled: true,
            response: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A provider that reports itself as not configured.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            response: Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<Value, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        self.response.clone()
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}
