use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "config/base";
const ENV_PREFIX: &str = "WONGNOK";

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSetting,
    pub postgres: PostgresSetting,
    pub auth: AuthSetting,
    pub shutdown: ShutdownSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub host: String,
    pub port: u16,
}

impl ApplicationSetting {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub store_timeout_in_millis: u64,
}

impl AuthSetting {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShutdownSetting {
    pub grace_period_in_secs: u64,
}

impl ShutdownSetting {
    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_in_secs)
    }
}

impl AuthServiceSetting {
    /// Loads settings from `config/base.json` (optional), then `WONGNOK__*`
    /// environment variables, then `DB_URL`. A `.env` file is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    pub fn load_from(config_file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080_i64)?
            .set_default("postgres.max_connections", 5_i64)?
            .set_default("auth.store_timeout_in_millis", 5000_i64)?
            .set_default("shutdown.grace_period_in_secs", 60_i64)?
            .add_source(File::with_name(config_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("postgres.url", std::env::var("DB_URL").ok())?
            .build()?
            .try_deserialize()
    }
}
