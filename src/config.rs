use serde::Deserialize;
use std::{fs, path::Path};

use crate::errors::ConfigError;
use crate::state::item::Item;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level for tracing (e.g. "info", "debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Items inserted into the store at startup.
    ///
    /// They go through the same validation as `/api/create`; invalid or
    /// duplicate entries are logged and skipped.
    #[serde(default = "default_seed_items")]
    pub seed_items: Vec<Item>,
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let file = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&file).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            seed_items: default_seed_items(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8989
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_items() -> Vec<Item> {
    vec![Item::new("1", "foo")]
}
