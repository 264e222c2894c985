use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::courses::{CatalogDrift, catalog_drift};
use crate::dataset::{TrainingDataError, TrainingTable};
use crate::interests::{INTEREST_COUNT, INTEREST_NAMES};
use crate::ml::forest::{ForestOptions, TrainDataset, train_random_forest};
use crate::ml::metrics::{accuracy, confusion_matrix};

use super::model::{CourseModel, MODEL_VERSION, ModelSaveError};
use super::slot::ModelSlot;

/// Errors raised by the load-data-and-train workflow.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Training data error: {0}")]
    Data(#[from] TrainingDataError),
    #[error("Training failed: {0}")]
    Fit(String),
    #[error("Could not save trained model: {0}")]
    Persist(#[from] ModelSaveError),
}

/// Summary of a successful training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub rows: usize,
    pub classes: usize,
    /// Accuracy of the new model on its own training rows.
    pub training_accuracy: f32,
    /// Class indices whose fitted label differs from the fixed course catalog.
    pub catalog_drift: Vec<CatalogDrift>,
    pub model_path: PathBuf,
}

/// Fit a course model from an in-memory training table.
pub fn fit_course_model(
    table: &TrainingTable,
    options: &ForestOptions,
) -> Result<(CourseModel, f32), TrainingError> {
    let encoded = table.encode()?;
    let dataset = TrainDataset {
        feature_len: INTEREST_COUNT,
        n_classes: encoded.classes.len(),
        x: encoded.x,
        y: encoded.y,
    };
    let forest = train_random_forest(&dataset, options).map_err(TrainingError::Fit)?;
    let model = CourseModel {
        model_version: MODEL_VERSION,
        features: INTEREST_NAMES.iter().map(|name| name.to_string()).collect(),
        classes: encoded.classes,
        trained_rows: dataset.x.len(),
        source: None,
        forest,
    };
    let cm = confusion_matrix(&model, &dataset.x, &dataset.y, dataset.n_classes);
    Ok((model, accuracy(&cm)))
}

/// Train from a CSV file, persist the model, then make it the active one.
///
/// On any error the slot is left untouched, so a previously loaded model keeps
/// serving predictions.
pub fn train_from_csv(
    slot: &mut ModelSlot<CourseModel>,
    csv_path: &Path,
    model_path: &Path,
    options: &ForestOptions,
) -> Result<TrainingReport, TrainingError> {
    info!("Training course model from {}", csv_path.display());
    let table = TrainingTable::from_path(csv_path)?;
    let (mut model, training_accuracy) = fit_course_model(&table, options)?;
    model.source = Some(csv_path.to_path_buf());

    let drift = catalog_drift(&model.classes);
    if !drift.is_empty() {
        warn!(
            "Fitted course labels differ from the course catalog at {} indices; \
             predictions use the labels stored with the model",
            drift.len()
        );
    }

    model.save_json(model_path)?;
    let report = TrainingReport {
        rows: model.trained_rows,
        classes: model.classes.len(),
        training_accuracy,
        catalog_drift: drift,
        model_path: model_path.to_path_buf(),
    };
    slot.replace(model);
    info!(
        "Trained {} trees on {} rows ({} courses, training accuracy {:.3}); saved to {}",
        options.n_trees,
        report.rows,
        report.classes,
        report.training_accuracy,
        model_path.display()
    );
    Ok(report)
}
