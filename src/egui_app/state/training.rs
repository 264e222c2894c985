use std::path::PathBuf;

use crate::recommender::ModelStatus;

/// Snapshot of the last successful training run.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSummary {
    pub source: PathBuf,
    pub rows: usize,
    pub courses: usize,
    pub training_accuracy: f32,
    /// Number of class indices whose label differs from the course catalog.
    pub catalog_drift: usize,
}

/// UI state for model availability and the training workflow.
#[derive(Clone, Debug)]
pub struct TrainingUiState {
    pub model_status: ModelStatus,
    pub summary: Option<TrainingSummary>,
}

impl Default for TrainingUiState {
    fn default() -> Self {
        Self {
            model_status: ModelStatus::NoModel,
            summary: None,
        }
    }
}

impl TrainingSummary {
    /// One-line summary for the footer.
    pub fn describe(&self) -> String {
        let file = self
            .source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());
        let mut text = format!(
            "{} rows from {file}, {} courses, {:.0}% training accuracy",
            self.rows,
            self.courses,
            self.training_accuracy * 100.0
        );
        match self.catalog_drift {
            0 => {}
            1 => text.push_str(", 1 label differs from catalog"),
            n => text.push_str(&format!(", {n} labels differ from catalog")),
        }
        text
    }
}
