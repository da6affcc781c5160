use secrecy::SecretString;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

use crate::services::providers::gemini::{GeminiConfig, DEFAULT_API_BASE};

pub const DEFAULT_SERVICE_NAME: &str = "relay-service";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub telemetry: TelemetryConfig,
    pub gemini: GeminiSettings,
    pub security: SecurityConfig,
}

/// Logging settings. All have defaults, so they can be read before the
/// secrets are validated.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: SecretString,
    /// Model name, e.g. gemini-2.5-flash
    pub model: String,
    pub api_base: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Value game servers must send in `x-roblox-secret`.
    pub shared_secret: SecretString,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        TelemetryConfig {
            service_name: get("SERVICE_NAME", DEFAULT_SERVICE_NAME),
            log_level: get("LOG_LEVEL", "info"),
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|v| !v.is_empty()),
        }
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the relay settings from an arbitrary key lookup.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: Option<&str>| get_env(&lookup, key, default);

        let timeout_raw = get(
            "GEMINI_TIMEOUT_SECONDS",
            Some(&DEFAULT_TIMEOUT_SECONDS.to_string()),
        )?;
        let timeout_seconds = timeout_raw.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_TIMEOUT_SECONDS must be a whole number of seconds, got '{}': {}",
                timeout_raw,
                e
            ))
        })?;

        Ok(RelayConfig {
            common,
            telemetry: TelemetryConfig::from_lookup(&lookup),
            gemini: GeminiSettings {
                api_key: SecretString::new(get("GEMINI_KEY", None)?),
                model: get("GEMINI_MODEL", Some(DEFAULT_MODEL))?,
                api_base: get("GEMINI_API_BASE", Some(DEFAULT_API_BASE))?,
                timeout_seconds,
            },
            security: SecurityConfig {
                shared_secret: SecretString::new(get("SHARED_SECRET", None)?),
            },
        })
    }

    /// Provider settings for the Gemini client.
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini.api_key.clone(),
            model: self.gemini.model.clone(),
            api_base: self.gemini.api_base.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_seconds),
        }
    }
}

fn get_env<F>(lookup: &F, key: &str, default: Option<&str>) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        Some(val) => Ok(val),
        None => default.map(str::to_string).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
        }),
    }
}
