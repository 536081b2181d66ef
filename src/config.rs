//! Process configuration read from the environment at startup

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKEND_URL: &str = "https://opensearch.lco.gtn/mysql-telemetry-*/_search?pretty";
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// True when `PORT` was not set.
    pub port_is_default: bool,
    pub backend_url: String,
    pub backend_timeout: Option<Duration>,
    pub template_dir: PathBuf,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; invalid numbers are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (port, port_is_default) = match lookup("PORT") {
            Some(value) => (
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|e| anyhow!("unable to convert PORT '{}' to a port number: {}", value, e))?,
                false,
            ),
            None => (DEFAULT_PORT, true),
        };

        let backend_timeout = match lookup("WEATHER_BACKEND_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(value.trim().parse::<u64>().map_err(|e| {
                anyhow!(
                    "unable to convert WEATHER_BACKEND_TIMEOUT_SECS '{}' to seconds: {}",
                    value,
                    e
                )
            })?)),
            None => None,
        };

        Ok(Self {
            port,
            port_is_default,
            backend_url: lookup("WEATHER_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            backend_timeout,
            template_dir: lookup("WEATHER_TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR)),
            log_dir: lookup("WEATHER_LOG_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }
}
