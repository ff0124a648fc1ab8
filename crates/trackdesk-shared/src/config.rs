//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_REMOTE_TIMEOUT_SECONDS, SESSION_COOKIE_NAME};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub remote: RemoteSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Directory holding the prebuilt UI bundle served for page routes.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteSettings {
    pub base_url: String,
    pub key: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
}

impl AppSettings {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;

        let loaded: AppConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 3000)?
            .set_default("app.name", "trackdesk")?
            .set_default("app.static_dir", "static")?
            .set_default("remote.base_url", "")?
            .set_default("remote.key", "")?
            .set_default("remote.timeout_seconds", DEFAULT_REMOTE_TIMEOUT_SECONDS)?
            .set_default("session.cookie_name", SESSION_COOKIE_NAME)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.remote.base_url.trim().is_empty() {
            return Err(AppError::InvalidConfig("remote.base_url must be set".into()));
        }
        if self.remote.key.trim().is_empty() {
            return Err(AppError::InvalidConfig("remote.key must be set".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("remote.base_url", "https://sheets.example.com/exec")
            .unwrap()
            .set_override("remote.key", "secret")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.port, 3000);
        assert_eq!(config.session.cookie_name, "auth-token");
        assert_eq!(config.remote.timeout_seconds, 30);
        assert!(!config.app.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_remote_key_is_rejected() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("remote.base_url", "https://sheets.example.com/exec")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }
}
