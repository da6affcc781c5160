use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    /// Load the common settings.
    ///
    /// Sources, lowest precedence first: the optional `configuration` file,
    /// `APP__*` environment variables, then a bare `PORT` variable as set by
    /// most hosting platforms.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", std::env::var("PORT").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests in this module mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set(key: &str, value: Option<&str>) {
        // SAFETY: every test touching the environment holds ENV_LOCK.
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_port_overrides_prefixed_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        set("APP__PORT", Some("4000"));
        set("PORT", Some("5000"));
        let with_port = Config::load();

        set("PORT", None);
        let without_port = Config::load();

        set("APP__PORT", None);
        let defaults = Config::load();

        assert_eq!(with_port.unwrap().port, 5000);
        assert_eq!(without_port.unwrap().port, 4000);
        assert_eq!(defaults.unwrap().port, DEFAULT_PORT);
    }
}
