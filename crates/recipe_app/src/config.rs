//! Application configuration, read from a RON file.
//!
//! A missing file means defaults; an unreadable or malformed file is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use recipe_client::{ClientSettings, DEFAULT_BASE_URL};
use recipe_logging::{recipe_info, LogDestination};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./recipes.ron";
const DEFAULT_LOG_FILE: &str = "./recipes.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            log_destination: LogDestination::File,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read config {:?}", path));
            }
        };

        let config: AppConfig =
            ron::from_str(&content).with_context(|| format!("failed to parse config {:?}", path))?;
        recipe_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::new();
        ron::ser::to_string_pretty(self, pretty).context("failed to serialize config")
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// How long to wait for the store before giving up on an answer.
    pub fn answer_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs + self.request_timeout_secs + 5)
    }
}
