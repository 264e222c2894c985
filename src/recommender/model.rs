use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interests::INTEREST_NAMES;
use crate::ml::Classifier;
use crate::ml::forest::RandomForest;

/// Current on-disk model format version.
pub const MODEL_VERSION: i64 = 1;

/// Errors raised while loading a persisted model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to read model {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Model {path} is not usable: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

impl ModelLoadError {
    /// True when the model file simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Errors raised while writing a model to disk.
#[derive(Debug, Error)]
pub enum ModelSaveError {
    #[error("Unable to create model directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize model: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write model {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Trained course classifier together with the mappings it was trained against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModel {
    /// Model format version.
    pub model_version: i64,
    /// Indicator names in the column order the forest was fitted on.
    pub features: Vec<String>,
    /// Fitted label mapping: class index `i` is `classes[i]`.
    pub classes: Vec<String>,
    /// Number of rows in the training table.
    pub trained_rows: usize,
    /// Training file the model was fitted from, when known.
    #[serde(default)]
    pub source: Option<PathBuf>,
    pub forest: RandomForest,
}

impl CourseModel {
    /// Validate the model against the current indicator universe.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_version != MODEL_VERSION {
            return Err(format!(
                "Unsupported model_version {} (expected {MODEL_VERSION})",
                self.model_version
            ));
        }
        if self.features.len() != INTEREST_NAMES.len()
            || self.features.iter().zip(INTEREST_NAMES).any(|(a, b)| a != b)
        {
            return Err(
                "Feature list does not match the current interest indicators; retrain the model"
                    .to_string(),
            );
        }
        if self.classes.len() < 2 {
            return Err("Model must contain at least 2 classes".to_string());
        }
        if self.forest.n_classes != self.classes.len() {
            return Err(format!(
                "Forest predicts {} classes but {} labels are stored",
                self.forest.n_classes,
                self.classes.len()
            ));
        }
        if self.forest.feature_len != self.features.len() {
            return Err("Forest feature length does not match feature list".to_string());
        }
        self.forest.validate()
    }

    /// Load a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelLoadError> {
        let bytes = fs::read(path).map_err(|source| ModelLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self =
            serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        model.validate().map_err(|reason| ModelLoadError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(model)
    }

    /// Write the model as JSON, replacing any existing file.
    ///
    /// The bytes go to a sibling `.tmp` file that is renamed over `path`, so an
    /// existing model file is either fully replaced or left as it was.
    pub fn save_json(&self, path: &Path) -> Result<(), ModelSaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ModelSaveError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let bytes = serde_json::to_vec(self)?;
        let tmp = path.with_extension("tmp");
        let write_err = |source| ModelSaveError::Write {
            path: tmp.clone(),
            source,
        };
        let mut file = File::create(&tmp).map_err(write_err)?;
        file.write_all(&bytes).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        drop(file);
        fs::rename(&tmp, path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            ModelSaveError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl Classifier for CourseModel {
    fn predict_class_index(&self, features: &[f32]) -> usize {
        self.forest.predict_class_index(features)
    }

    fn class_label(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}
