//! Daemon settings
//!
//! Layered: built-in defaults, then an optional TOML file (`qanda.toml`, or
//! the path in `QANDA_CONFIG`), then `QANDA_*` environment variables.

use anyhow::{Context, Result};
use qanda_infra_sqlite::RetryConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = "qanda.toml";
const ENV_PREFIX: &str = "QANDA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
    pub connect_attempts: u32,
    pub connect_retry_delay_ms: u64,
}

impl Settings {
    /// Load settings from the default file location and the environment
    pub fn load() -> Result<Self> {
        let path = std::env::var(format!("{}_CONFIG", ENV_PREFIX))
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let settings: Settings = config::Config::builder()
            .set_default("database_url", default_database_url())?
            .set_default("rpc_host", "127.0.0.1")?
            .set_default("rpc_port", 9527)?
            .set_default("log_format", "pretty")?
            .set_default("connect_attempts", 10)?
            .set_default("connect_retry_delay_ms", 2000)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(settings.expanded())
    }

    fn expanded(mut self) -> Self {
        self.database_url = shellexpand::tilde(&self.database_url).into_owned();
        self
    }

    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.connect_attempts,
            delay: Duration::from_millis(self.connect_retry_delay_ms),
        }
    }

    /// Directory that must exist before SQLite can create the database file
    pub fn database_dir(&self) -> Option<PathBuf> {
        let url = &self.database_url;
        if url.contains(":memory:") {
            return None;
        }
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        let path = path.split('?').next().unwrap_or(path);
        PathBuf::from(path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}

/// `<platform data dir>/qanda.db`, falling back to `~/.qanda/qanda.db`
fn default_database_url() -> String {
    directories::ProjectDirs::from("", "", "qanda")
        .map(|dirs| dirs.data_dir().join("qanda.db").to_string_lossy().into_owned())
        .unwrap_or_else(|| "~/.qanda/qanda.db".to_string())
}
