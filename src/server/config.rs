use std::net::SocketAddr;

use crate::{model::schedule::DataMode, server::error::config::ConfigError};

/// Database used when `DATABASE_URL` is not set, the server then runs in local mode.
pub const LOCAL_DATABASE_URL: &str = "sqlite::memory:";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub admin_email: String,
    pub admin_password: String,
    pub supervisor_password: String,
    pub database_url: Option<String>,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            admin_email: required_var("ADMIN_EMAIL")?,
            admin_password: required_var("ADMIN_PASSWORD")?,
            supervisor_password: required_var("SUPERVISOR_PASSWORD")?,
            database_url: optional_var("DATABASE_URL"),
            bind_address,
        })
    }

    /// `local` when no database URL is configured.
    pub fn data_mode(&self) -> DataMode {
        match self.database_url {
            Some(_) => DataMode::Database,
            None => DataMode::Local,
        }
    }

    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(LOCAL_DATABASE_URL)
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    match optional_var(name) {
        Some(value) => Ok(value),
        None => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
