//! Server configuration file support.
//!
//! Settings are read from an `eclipses.toml` file when one exists and can be
//! overridden through environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::dataset::error::{DatasetError, DatasetResult, ErrorContext};
use crate::dataset::factory::LoadStrategy;

/// Config file name searched in the standard locations.
pub const CONFIG_FILE_NAME: &str = "eclipses.toml";

/// Full server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Source file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub load_strategy: LoadStrategy,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("eclipse_data.csv")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            load_strategy: LoadStrategy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(DatasetError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new("read_config").with_path(path);

        let content = fs::read_to_string(path).map_err(|e| {
            DatasetError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            DatasetError::configuration_with_context(
                format!("Failed to parse config file: {}", e),
                context(),
            )
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `eclipses.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists; a file that exists but
    /// cannot be parsed is an error.
    pub fn from_default_location() -> DatasetResult<Self> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        match search_paths.iter().find(|p| p.exists()) {
            Some(path) => {
                log::info!("Using configuration file {}", path.display());
                Self::from_file(path)
            }
            None => {
                log::info!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Recognized keys: `HOST`, `PORT`, `ECLIPSES_DATA_PATH`,
    /// `ECLIPSES_LOAD_STRATEGY`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> DatasetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                DatasetError::configuration(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }
        if let Some(path) = lookup("ECLIPSES_DATA_PATH") {
            self.dataset.path = PathBuf::from(path);
        }
        if let Some(strategy) = lookup("ECLIPSES_LOAD_STRATEGY") {
            self.dataset.load_strategy = strategy.parse().map_err(DatasetError::configuration)?;
        }
        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(self) -> DatasetResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Resolve the listen address.
    pub fn bind_address(&self) -> DatasetResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| DatasetError::configuration(format!("Invalid bind address: {}", e)))
    }
}
