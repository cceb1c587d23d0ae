use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub epg: EpgConfig,
    #[serde(default)]
    pub channels: ChannelsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted request body, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory served under `/static`
    #[serde(default = "default_static_path")]
    pub static_path: PathBuf,
    /// Page served at `/`
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpgConfig {
    /// Number of days of placeholder guide data, starting today
    #[serde(default = "default_epg_days")]
    pub days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelsConfig {
    /// Start with the built-in sample channels instead of an empty list
    #[serde(default = "default_seed_sample_channels")]
    pub seed_sample_channels: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_static_path() -> PathBuf {
    PathBuf::from(DEFAULT_STATIC_PATH)
}

fn default_index_file() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_FILE)
}

fn default_epg_days() -> u32 {
    DEFAULT_EPG_DAYS
}

fn default_seed_sample_channels() -> bool {
    DEFAULT_SEED_SAMPLE_CHANNELS
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            static_path: default_static_path(),
            index_file: default_index_file(),
        }
    }
}

impl Default for EpgConfig {
    fn default() -> Self {
        Self {
            days: default_epg_days(),
        }
    }
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            seed_sample_channels: default_seed_sample_channels(),
        }
    }
}

impl Config {
    /// Read the TOML file at `config_file`, writing the defaults there first
    /// if it does not exist.
    pub fn load_from_file(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file.display());
            Ok(default_config)
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.web.host, self.web.port)
    }
}
