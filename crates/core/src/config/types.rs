use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use super::loader::ConfigError;

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
    /// Directory holding one sub-directory per category.
    pub data_root: String,
    /// Categories this profile knows about. Empty allows any category.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Per-category directory overrides; `{{data_root}}` is substituted.
    #[serde(default)]
    pub category_dirs: HashMap<String, String>,
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
    pub data_root: PathBuf,
    pub categories: Vec<String>,
    /// Resolved per-category directory overrides.
    pub category_dirs: HashMap<String, PathBuf>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Directory for a category: the configured override, else
    /// `data_root/<category>`.
    pub fn category_dir(&self, category: &str) -> Result<PathBuf, ConfigError> {
        if !self.categories.is_empty() && !self.categories.iter().any(|c| c == category) {
            return Err(ConfigError::UnknownCategory {
                category: category.to_string(),
                known: self.categories.join(", "),
            });
        }

        Ok(self
            .category_dirs
            .get(category)
            .cloned()
            .unwrap_or_else(|| self.data_root.join(category)))
    }
}
