use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub templates_dir: String,
    /// Extra directories rendered scripts may be saved under.
    #[serde(default)]
    pub extra_roots: Vec<String>,
    /// Whether the home directory is an allowed root (default: true).
    #[serde(default = "default_include_home")]
    pub include_home: bool,
}

fn default_include_home() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub templates_dir: PathBuf,
    /// Expanded `extra_roots`, not yet checked for existence.
    pub extra_roots: Vec<PathBuf>,
    pub include_home: bool,
    pub logging: LoggingConfig,
}
