use super::*;
use crate::recommender::TrainingReport;
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::warn;

impl EguiController {
    /// Ask for a CSV file and train from it. Cancelling the dialog does nothing.
    pub fn load_data_and_train(&mut self) {
        let Some(path) = pick_training_csv() else {
            return;
        };
        self.train_from_path(&path);
    }

    /// Train from `path`, keeping the previous model if anything fails.
    pub fn train_from_path(&mut self, path: &Path) {
        self.set_status(
            format!("Training model from {}", path.display()),
            StatusTone::Busy,
        );
        match self.recommender.train_from_csv(path) {
            Ok(report) => {
                self.record_training(path, &report);
                self.sync_model_status();
                self.set_status(
                    format!(
                        "Model trained on {} rows and saved to {}",
                        report.rows,
                        report.model_path.display()
                    ),
                    StatusTone::Info,
                );
                self.show_notice(Notice::info(
                    "Success",
                    "Model trained and saved successfully!",
                ));
            }
            Err(err) => {
                warn!("Training from {} failed: {err}", path.display());
                self.sync_model_status();
                self.set_status(format!("Training failed: {err}"), StatusTone::Error);
                self.show_notice(Notice::error(format!("An error occurred: {err}")));
            }
        }
    }

    pub(super) fn record_training(&mut self, source: &Path, report: &TrainingReport) {
        self.ui.training.summary = Some(TrainingSummary {
            source: source.to_path_buf(),
            rows: report.rows,
            courses: report.classes,
            training_accuracy: report.training_accuracy,
            catalog_drift: report.catalog_drift.len(),
        });
    }
}

fn pick_training_csv() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select CSV file")
        .add_filter("CSV files", &["csv"])
        .pick_file()
}
