use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::ml::forest::ForestOptions;

use super::model::{CourseModel, ModelLoadError};
use super::slot::ModelSlot;
use super::training::{TrainingError, TrainingReport, train_from_csv};

/// Well-known files consulted at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    /// Persisted model artifact.
    pub model_file: PathBuf,
    /// Training table used when no model can be loaded.
    pub default_training_csv: PathBuf,
}

impl ModelPaths {
    /// Anchor relative paths at `base`; absolute paths are kept as they are.
    pub fn anchored(base: &Path, model_file: &Path, default_training_csv: &Path) -> Self {
        Self {
            model_file: base.join(model_file),
            default_training_csv: base.join(default_training_csv),
        }
    }
}

/// How the startup resolution ended.
#[derive(Debug)]
pub enum StartupOutcome {
    LoadedFromDisk {
        path: PathBuf,
    },
    TrainedFromDefault {
        csv_path: PathBuf,
        report: TrainingReport,
    },
    /// Neither source worked; predictions stay disabled until the user trains.
    NoModel {
        load_error: ModelLoadError,
        /// `None` when the default training file does not exist.
        train_error: Option<TrainingError>,
    },
}

impl StartupOutcome {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, Self::NoModel { .. })
    }
}

/// Load the persisted model, else auto-train from the default CSV, else give up.
pub fn resolve_startup(
    slot: &mut ModelSlot<CourseModel>,
    paths: &ModelPaths,
    options: &ForestOptions,
) -> StartupOutcome {
    let load_error = match CourseModel::load_json(&paths.model_file) {
        Ok(model) => {
            info!("Loaded course model from {}", paths.model_file.display());
            slot.replace(model);
            return StartupOutcome::LoadedFromDisk {
                path: paths.model_file.clone(),
            };
        }
        Err(err) => err,
    };
    if load_error.is_missing() {
        info!("No saved model at {}", paths.model_file.display());
    } else {
        warn!("{load_error}");
    }

    if !paths.default_training_csv.is_file() {
        warn!(
            "No default training file at {}; predictions disabled until a model is trained",
            paths.default_training_csv.display()
        );
        return StartupOutcome::NoModel {
            load_error,
            train_error: None,
        };
    }

    match train_from_csv(slot, &paths.default_training_csv, &paths.model_file, options) {
        Ok(report) => StartupOutcome::TrainedFromDefault {
            csv_path: paths.default_training_csv.clone(),
            report,
        },
        Err(err) => {
            warn!("Automatic training failed: {err}");
            StartupOutcome::NoModel {
                load_error,
                train_error: Some(err),
            }
        }
    }
}
