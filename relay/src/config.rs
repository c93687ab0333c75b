//! Relay configuration loaded from the process environment.
//!
//! Handlers never read the environment themselves: `RelayConfig` is built once
//! in `main` and carried in `AppState`, so tests construct it directly.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TEMPLATE_NAME: &str = "free_trial_broadcast";
pub const DEFAULT_BROADCAST_NAME: &str = "Welcome - DEMO";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// `THIRD_PARTY_API_URL`. Missing is not a startup error; each submission
    /// answers 500 until it is set.
    pub api_url: Option<String>,

    /// `THIRD_PARTY_API_KEY`, sent verbatim as `Authorization`.
    pub api_key: Option<String>,

    /// `RELAY_TEST_MODE`: log the upstream request instead of sending it.
    pub test_mode: bool,

    /// `REQUEST_TIMEOUT` in seconds for the upstream call.
    pub request_timeout: Duration,

    pub template_name: String,
    pub broadcast_name: String,

    pub bind_addr: SocketAddr,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            test_mode: false,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            broadcast_name: DEFAULT_BROADCAST_NAME.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl RelayConfig {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // dotenvy::dotenv never overrides variables that are already set.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_url = get("THIRD_PARTY_API_URL");
        if let Some(url) = &api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(invalid("THIRD_PARTY_API_URL", "Must start with http:// or https://"));
            }
        }

        let test_mode = match get("RELAY_TEST_MODE") {
            Some(v) => parse_bool("RELAY_TEST_MODE", &v)?,
            None => defaults.test_mode,
        };

        let request_timeout = match get("REQUEST_TIMEOUT") {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(invalid(
                        "REQUEST_TIMEOUT",
                        &format!("Must be a positive number of seconds, got: {v}"),
                    ))
                }
            },
            None => defaults.request_timeout,
        };

        let ip = match get("HOST") {
            Some(v) => v
                .trim()
                .trim_start_matches('[')
                .trim_end_matches(']')
                .parse::<IpAddr>()
                .map_err(|_| invalid("HOST", &format!("Must be an IP address, got: {v}")))?,
            None => defaults.bind_addr.ip(),
        };
        let port = match get("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid("PORT", &format!("Must be a port number, got: {v}")))?,
            None => defaults.bind_addr.port(),
        };
        let bind_addr = SocketAddr::new(ip, port);

        Ok(Self {
            api_url,
            api_key: get("THIRD_PARTY_API_KEY"),
            test_mode,
            request_timeout,
            template_name: get("WATI_TEMPLATE_NAME").unwrap_or(defaults.template_name),
            broadcast_name: get("WATI_BROADCAST_NAME").unwrap_or(defaults.broadcast_name),
            bind_addr,
        })
    }
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(invalid(var, &format!("Expected true or false, got: {other}"))),
    }
}
