//! Persisted application settings.
//!
//! Settings live in `config.toml` inside the application directory. Every field has a
//! default, so a missing file or a partial file both load cleanly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::ml::forest::{ForestOptions, MaxFeatures};
use crate::recommender::ModelPaths;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Aggregate application settings loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub training: TrainingSettings,
}

/// Where the model artifact and the default training table live.
///
/// Relative paths are resolved against the working directory at launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Training table used for automatic training when no model can be loaded.
    #[serde(default = "default_training_csv")]
    pub default_training_csv: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            default_training_csv: default_training_csv(),
        }
    }
}

impl ModelSettings {
    /// Resolve the configured files against `base`.
    pub fn paths(&self, base: &Path) -> ModelPaths {
        ModelPaths::anchored(base, &self.model_path, &self.default_training_csv)
    }
}

/// Forest hyperparameters used by every training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSettings {
    #[serde(default = "default_n_trees")]
    pub n_trees: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    #[serde(default = "default_max_features")]
    pub max_features: MaxFeatures,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            n_trees: default_n_trees(),
            seed: default_seed(),
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            max_features: default_max_features(),
        }
    }
}

impl From<&TrainingSettings> for ForestOptions {
    fn from(settings: &TrainingSettings) -> Self {
        ForestOptions {
            n_trees: settings.n_trees,
            seed: settings.seed,
            max_depth: settings.max_depth,
            min_samples_split: settings.min_samples_split,
            max_features: settings.max_features,
        }
    }
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    load_from_path(&path)
}

/// Load configuration from a specific path, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("course_model.json")
}

fn default_training_csv() -> PathBuf {
    PathBuf::from("stud.csv")
}

fn default_n_trees() -> usize {
    100
}

fn default_seed() -> u64 {
    42
}

fn default_min_samples_split() -> usize {
    2
}

fn default_max_features() -> MaxFeatures {
    MaxFeatures::Sqrt
}
