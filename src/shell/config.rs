use std::time::Duration;
use thiserror::Error;

use crate::shared::core::context::ContextDefaults;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub registry_url: String,
    pub http_timeout: Duration,
    pub context: ContextDefaults,
}

impl AppConfig {
    /// Create config from environment variables.
    ///
    /// - `BAP_REGISTRY_URL`, `BAP_ID`, `BAP_URI`: required
    /// - `BAP_HOST` (default `0.0.0.0`), `BAP_PORT` (default `8080`)
    /// - `BAP_HTTP_TIMEOUT_SECS`: outbound call timeout (default `40`)
    /// - `BAP_DOMAIN`, `BAP_COUNTRY`, `BAP_CITY`, `BAP_CORE_VERSION`: context defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));
        let or_default =
            |name: &'static str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let port = parse_or(&lookup, "BAP_PORT", 8080)?;
        let timeout_secs = parse_or(&lookup, "BAP_HTTP_TIMEOUT_SECS", 40)?;

        Ok(Self {
            host: or_default("BAP_HOST", "0.0.0.0"),
            port,
            registry_url: required("BAP_REGISTRY_URL")?,
            http_timeout: Duration::from_secs(timeout_secs),
            context: ContextDefaults {
                domain: or_default("BAP_DOMAIN", "nic2004:52110"),
                country: or_default("BAP_COUNTRY", "IND"),
                city: or_default("BAP_CITY", "std:080"),
                core_version: or_default("BAP_CORE_VERSION", "0.9.1"),
                bap_id: required("BAP_ID")?,
                bap_uri: required("BAP_URI")?,
            },
        })
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
