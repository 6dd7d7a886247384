//! Configuration for locating and tuning the store.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults (store file in the platform data directory, 5 second
//!    busy timeout, foreign keys not enforced)
//! 2. `config.json` in the data directory
//! 3. Environment variables `MOCKEXAM_DB` and `MOCKEXAM_BUSY_TIMEOUT`
//!    (a `.env` file is honoured through `dotenv`)
//!
//! ```rust,no_run
//! use mockexam::libs::config::Config;
//!
//! let store_config = Config::read()?.store_config();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::{StoreConfig, DEFAULT_BUSY_TIMEOUT};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "mockexam.db";

pub const ENV_DB_PATH: &str = "MOCKEXAM_DB";
pub const ENV_BUSY_TIMEOUT: &str = "MOCKEXAM_BUSY_TIMEOUT";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Store file location. Defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Seconds to wait for the write lock before giving up.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: f64,

    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
}

fn default_busy_timeout_secs() -> f64 {
    DEFAULT_BUSY_TIMEOUT.as_secs_f64()
}

fn default_foreign_keys() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            busy_timeout_secs: default_busy_timeout_secs(),
            foreign_keys: default_foreign_keys(),
        }
    }
}

impl Config {
    /// Reads the configuration file from the data directory and applies the
    /// environment overrides. A missing file yields the defaults.
    pub fn read() -> Result<Config> {
        dotenv::dotenv().ok();
        let config_file_path = DataStorage::new().path_of(CONFIG_FILE_NAME);
        let config = Self::read_from(&config_file_path)?;
        config.with_env_overrides()
    }

    /// Reads a configuration file without consulting the environment.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            msg_debug!(Message::ConfigFileNotFound(path.display().to_string()));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("parsing {}", path.display()))?;
        msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    fn with_env_overrides(mut self) -> Result<Config> {
        if let Ok(path) = env::var(ENV_DB_PATH) {
            self.db_path = Some(PathBuf::from(path));
        }
        if let Ok(secs) = env::var(ENV_BUSY_TIMEOUT) {
            self.busy_timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got {:?}", ENV_BUSY_TIMEOUT, secs))?;
        }
        Ok(self)
    }

    /// Connection settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        let path = self.db_path.clone().unwrap_or_else(|| DataStorage::new().path_of(DB_FILE_NAME));
        let busy_timeout = match Duration::try_from_secs_f64(self.busy_timeout_secs) {
            Ok(busy_timeout) => busy_timeout,
            Err(_) => {
                msg_warning!(Message::InvalidBusyTimeout(self.busy_timeout_secs));
                DEFAULT_BUSY_TIMEOUT
            }
        };

        StoreConfig::new(path).busy_timeout(busy_timeout).foreign_keys(self.foreign_keys)
    }
}
