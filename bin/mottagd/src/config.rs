//! Server configuration file handling.
//!
//! `mottagd -c /etc/mottag/server.toml` reads a TOML file of this
//! shape; every field has a workable default so a missing file just
//! runs with an adjacent `data/` directory:
//!
//! ```toml
//! listen = "0.0.0.0:8080"
//!
//! [storage]
//! data_dir = "/var/lib/mottag"
//! sqlite_path = "/var/lib/mottag/data.sqlite"  # optional
//! ```

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Overrides `{data_dir}/data.sqlite` when set.
    #[serde(default)]
    pub sqlite_path: Option<String>,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sqlite_path: None,
        }
    }
}

impl ServerConfig {
    /// Load config from disk, or return defaults if the file doesn't
    /// exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
