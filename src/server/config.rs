use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Directory served under `/static`.
    pub static_dir: String,

    /// Whether the session cookie carries the `Secure` attribute.
    pub session_secure_cookie: bool,
    /// Days of inactivity after which a session expires.
    pub session_inactivity_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            session_secure_cookie: parse_var("SESSION_SECURE_COOKIE", false)?,
            session_inactivity_days: parse_var(
                "SESSION_INACTIVITY_DAYS",
                DEFAULT_SESSION_INACTIVITY_DAYS,
            )?,
        })
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => parse_value(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
