use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub observability: ObservabilityConfig,
}

/// Document store location. Either part may be missing; the service still
/// starts and reports the gap through its diagnostics.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    pub url: Option<Secret<String>>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

impl ContactConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;

        Ok(ContactConfig {
            common: common_config,
            database: DatabaseConfig {
                url: non_empty_env(DATABASE_URL_VAR).map(Secret::new),
                name: non_empty_env(DATABASE_NAME_VAR),
            },
            observability: ObservabilityConfig {
                log_level: non_empty_env("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                otlp_endpoint: non_empty_env("OTLP_ENDPOINT"),
            },
        })
    }
}

/// Read an environment variable, treating an empty value as unset.
pub fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
