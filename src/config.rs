//! Environment-driven configuration.

use std::str::FromStr;

use thiserror::Error;

use crate::history::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("HISTORY_LIMIT must be at least 1")]
    ZeroHistoryLimit,
}

/// Runtime settings read from the process environment (after `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    /// History is kept in memory when unset
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub history_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;
        let history_limit = parse_or(&lookup, "HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT)?;

        if history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }

        Ok(Self {
            bind_addr,
            database_url,
            database_max_connections,
            history_limit,
        })
    }
}

fn parse_or<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidNumber { name, value })
        }
        None => Ok(default),
    }
}
