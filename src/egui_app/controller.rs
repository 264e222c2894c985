//! Bridges the recommendation core to the egui UI.
//!
//! The controller owns the [`Recommender`] and the [`UiState`]; UI callbacks call
//! plain methods here and the renderer only reads state back.

use std::path::Path;

use tracing::info;

use crate::config::{self, AppConfig};
use crate::egui_app::state::*;
use crate::ml::forest::ForestOptions;
use crate::recommender::{ModelStatus, Recommender, StartupOutcome};

mod model_training;
mod predictions;
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

/// Title and body of the About dialog.
pub const ABOUT_TITLE: &str = "About";
pub const ABOUT_TEXT: &str = "Course Recommendation System\n\n\
    This system uses machine learning to recommend suitable courses based on your \
    interests and preferences.\n\n\
    Version 2.0";

const NO_MODEL_MESSAGE: &str = "No model found. Please go to File \u{2192} \
    Load Data & Train Model to load your data file.";

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    recommender: Recommender,
}

impl EguiController {
    /// Build a controller whose relative model paths resolve against `working_dir`.
    pub fn new(config: &AppConfig, working_dir: &Path) -> Self {
        let paths = config.model.paths(working_dir);
        let options = ForestOptions::from(&config.training);
        Self {
            ui: UiState::default(),
            recommender: Recommender::new(paths, options),
        }
    }

    /// Load persisted settings, writing defaults on first launch.
    pub fn load_configuration() -> Result<AppConfig, config::ConfigError> {
        let path = config::config_path()?;
        let cfg = config::load_from_path(&path)?;
        if !path.exists() {
            config::save_to_path(&cfg, &path)?;
            info!("Wrote default settings to {}", path.display());
        }
        Ok(cfg)
    }

    /// Load or auto-train the model and report the outcome to the user.
    pub fn resolve_startup_model(&mut self) {
        let outcome = self.recommender.resolve_startup();
        self.sync_model_status();
        match outcome {
            StartupOutcome::LoadedFromDisk { path } => {
                self.set_status(
                    format!("Model loaded from {}", path.display()),
                    StatusTone::Info,
                );
            }
            StartupOutcome::TrainedFromDefault { csv_path, report } => {
                let file = csv_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| csv_path.display().to_string());
                self.record_training(&csv_path, &report);
                self.set_status(
                    format!("Model trained automatically from {}", csv_path.display()),
                    StatusTone::Info,
                );
                self.show_notice(Notice::info(
                    "Success",
                    format!("Model trained automatically with {file}!"),
                ));
            }
            StartupOutcome::NoModel { train_error, .. } => {
                let status = match &train_error {
                    Some(err) => format!("No model available: {err}"),
                    None => "No model available".to_string(),
                };
                self.set_status(status, StatusTone::Warning);
                self.show_notice(Notice::warning("Model Not Found", NO_MODEL_MESSAGE));
            }
        }
    }

    pub fn model_status(&self) -> ModelStatus {
        self.recommender.status()
    }

    pub fn select_tab(&mut self, index: usize) {
        self.ui.form.active_tab = index;
    }

    pub fn set_interest(&mut self, index: usize, active: bool) {
        self.ui.form.selection.set(index, active);
    }

    pub fn toggle_interest(&mut self, index: usize) {
        self.ui.form.selection.toggle(index);
    }

    /// Select all checkboxes.
    pub fn select_all(&mut self) {
        self.ui.form.selection.select_all();
    }

    /// Clear all checkboxes.
    pub fn clear_all(&mut self) {
        self.ui.form.selection.clear_all();
    }

    pub fn show_about(&mut self) {
        self.ui.about_open = true;
    }

    pub fn close_about(&mut self) {
        self.ui.about_open = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.ui.notice = None;
    }

    fn show_notice(&mut self, notice: Notice) {
        self.ui.notice = Some(notice);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }

    fn sync_model_status(&mut self) {
        self.ui.training.model_status = self.recommender.status();
    }
}
