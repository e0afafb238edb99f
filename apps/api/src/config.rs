use std::path::PathBuf;

use anyhow::{Context, Result};

/// 16 MiB, the largest upload the service accepts.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Transient storage for uploaded documents. Created at startup if absent.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Tokio worker threads. `None` leaves the runtime default in place.
    pub worker_threads: Option<usize>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let defaults = Config::default();

        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            // 0 would make the runtime builder panic; treat it as unset
            worker_threads: optional_env::<usize>("WORKER_THREADS")?.filter(|&n| n > 0),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// `host:port` as handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8001,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            worker_threads: None,
            rust_log: "info".to_string(),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}
