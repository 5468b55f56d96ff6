use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";
pub const DEFAULT_POSTCODE: &str = "NR32";
pub const DEFAULT_AREA: &str = "Lowestoft";

/// Errors raised while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::NoHomeDirectory => {
                "Could not locate a home directory for config and logs".to_string()
            }
            ConfigError::Io(e) => format!("Could not read config file: {}", e),
            ConfigError::Parse(e) => format!("Config file is not valid JSON: {}", e),
        }
    }
}

/// Settings for the catalog location and the UI.
///
/// Missing fields in the file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub postcode: String,
    pub area: String,
    pub log_level: String,
    /// Amount the price sliders move per key press
    pub price_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            postcode: DEFAULT_POSTCODE.to_string(),
            area: DEFAULT_AREA.to_string(),
            log_level: "info".to_string(),
            price_step: 10.0,
        }
    }
}

/// Command line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub postcode: Option<String>,
    pub area: Option<String>,
    pub log_level: Option<String>,
}

fn project_dirs() -> Result<directories::ProjectDirs, ConfigError> {
    directories::ProjectDirs::from("uk", "skiphire", "skip-browser").ok_or(ConfigError::NoHomeDirectory)
}

/// Directory holding the log file.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

impl Config {
    /// Load from `path`, or from the default config location when `None`.
    ///
    /// A file that does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => project_dirs()?.config_dir().join("config.json"),
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(postcode) = overrides.postcode {
            self.postcode = postcode;
        }
        if let Some(area) = overrides.area {
            self.area = area;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    /// Full request URL including the location query.
    pub fn catalog_url(&self) -> String {
        format!(
            "{}?postcode={}&area={}",
            self.endpoint, self.postcode, self.area
        )
    }
}
