//! Application configuration.
//!
//! Defaults first, then an optional `shopcart.toml` beside the binary, then
//! environment variable overrides. The `.env` file is loaded by `main`
//! before this runs.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

const CONFIG_FILE: &str = "shopcart.toml";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TOAST_AUTO_CLOSE_MS: u64 = 3000;
const DEFAULT_NETWORK_DELAY_MS: u64 = 1000;

/// Resolved application settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for the persisted `user`/`cart`/`products` snapshots.
    pub data_dir: PathBuf,
    /// How long the oldest toast stays visible before auto-closing.
    pub toast_auto_close: Duration,
    /// Simulated network round-trip for login/register.
    pub network_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            toast_auto_close: Duration::from_millis(DEFAULT_TOAST_AUTO_CLOSE_MS),
            network_delay: Duration::from_millis(DEFAULT_NETWORK_DELAY_MS),
        }
    }
}

/// Optional overrides read from `shopcart.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    toast_auto_close_ms: Option<u64>,
    network_delay_ms: Option<u64>,
}

impl AppConfig {
    /// Loads configuration: defaults, then `shopcart.toml` when present,
    /// then `SHOPCART_*` environment variables.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the config file or an environment
    /// override cannot be parsed.
    pub fn load() -> Result<Self> {
        let mut config = AppConfig::default();

        if Path::new(CONFIG_FILE).exists() {
            let raw = std::fs::read_to_string(CONFIG_FILE)?;
            config.apply_file(&Self::parse_file(&raw)?);
            info!("loaded configuration from {CONFIG_FILE}");
        }

        if let Ok(dir) = std::env::var("SHOPCART_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(ms) = env_ms("SHOPCART_TOAST_AUTO_CLOSE_MS")? {
            config.toast_auto_close = Duration::from_millis(ms);
        }
        if let Some(ms) = env_ms("SHOPCART_NETWORK_DELAY_MS")? {
            config.network_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }

    fn parse_file(raw: &str) -> Result<FileConfig> {
        toml::from_str(raw).map_err(|err| Error::Config(format!("invalid {CONFIG_FILE}: {err}")))
    }

    fn apply_file(&mut self, file: &FileConfig) {
        if let Some(dir) = &file.data_dir {
            self.data_dir.clone_from(dir);
        }
        if let Some(ms) = file.toast_auto_close_ms {
            self.toast_auto_close = Duration::from_millis(ms);
        }
        if let Some(ms) = file.network_delay_ms {
            self.network_delay = Duration::from_millis(ms);
        }
    }
}

fn env_ms(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{name} must be an integer, got {value:?}"))),
        Err(_) => Ok(None),
    }
}
