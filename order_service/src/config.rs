// order_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

impl FromStr for LogFormat {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "text" | "pretty" => Ok(LogFormat::Text),
      "json" => Ok(LogFormat::Json),
      other => Err(format!("unknown log format '{}'", other)),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,
  /// Endpoint of the user service that receives order notifications.
  pub notification_url: String,
  pub notifier_timeout: Duration,
  pub run_migrations: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the config from any key lookup; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let required = |key: &str| lookup(key).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", key)));
    let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

    let server_host = or_default("SERVER_HOST", "127.0.0.1");
    let server_port: u16 = parse_value("SERVER_PORT", &or_default("SERVER_PORT", "3000"))?;
    let database_url = required("DATABASE_URL")?;
    let database_max_connections: u32 = parse_value("DATABASE_MAX_CONNECTIONS", &or_default("DATABASE_MAX_CONNECTIONS", "5"))?;
    let notification_url = required("USER_SERVICE_URL")?;
    let notifier_timeout_ms: u64 = parse_value("NOTIFIER_TIMEOUT_MS", &or_default("NOTIFIER_TIMEOUT_MS", "5000"))?;
    let run_migrations: bool = parse_value("RUN_MIGRATIONS", &or_default("RUN_MIGRATIONS", "false"))?;
    let log_format: LogFormat = parse_value("LOG_FORMAT", &or_default("LOG_FORMAT", "text"))?;

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      notification_url,
      notifier_timeout: Duration::from_millis(notifier_timeout_ms),
      run_migrations,
      log_format,
    })
  }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", key, e)))
}
