use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3333;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;

/// Listener and request-path settings read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store_timeout: Duration,
}

impl ServerConfig {
    /// `BACKEND_HOST`, `BACKEND_PORT` and `CREDENTIAL_STORE_TIMEOUT_MS`, each
    /// optional. A value that does not parse is an error rather than a default.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("BACKEND_PORT is not a valid port: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let timeout_ms = match env::var("CREDENTIAL_STORE_TIMEOUT_MS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    return Err(AppError::config(format!(
                        "CREDENTIAL_STORE_TIMEOUT_MS must be a positive integer: {raw}"
                    )))
                }
            },
            Err(_) => DEFAULT_STORE_TIMEOUT_MS,
        };

        Ok(Self {
            host,
            port,
            store_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
