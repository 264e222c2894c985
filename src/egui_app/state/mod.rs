//! Shared state types for the egui UI.

mod form;
mod notice;
mod status;
mod training;

pub use form::*;
pub use notice::*;
pub use status::*;
pub use training::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Interest checkboxes and the selected tab.
    pub form: InterestFormState,
    pub result: RecommendationState,
    /// Model availability and the last training summary.
    pub training: TrainingUiState,
    /// Modal message waiting to be acknowledged.
    pub notice: Option<Notice>,
    pub about_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: InterestFormState::default(),
            result: RecommendationState::default(),
            training: TrainingUiState::default(),
            notice: None,
            about_open: false,
        }
    }
}
