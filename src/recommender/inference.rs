use thiserror::Error;
use tracing::debug;

use crate::courses::UNKNOWN_COURSE;
use crate::interests::{InterestSelection, encode};
use crate::ml::Classifier;

use super::slot::ModelSlot;

/// Errors raised when asking for a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("No trained model is available")]
    ModelUnavailable,
}

/// Predicted course for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub class_index: usize,
    /// Course name, or `"Unknown"` when the index has no label.
    pub course: String,
}

/// Encode the selection and run it through the active model.
pub fn recommend<M: Classifier>(
    slot: &ModelSlot<M>,
    selection: &InterestSelection,
) -> Result<Recommendation, RecommendError> {
    let model = slot.get().ok_or(RecommendError::ModelUnavailable)?;
    let features = encode(selection);
    let class_index = model.predict_class_index(features.as_slice());
    let course = model
        .class_label(class_index)
        .unwrap_or(UNKNOWN_COURSE)
        .to_string();
    debug!(
        "Predicted class {class_index} ({course}) from {} active interests",
        selection.active_count()
    );
    Ok(Recommendation {
        class_index,
        course,
    })
}
