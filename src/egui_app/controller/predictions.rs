use super::*;
use crate::recommender::RecommendError;

impl EguiController {
    /// Predict a course for the current selection and show it in the result area.
    pub fn request_recommendation(&mut self) {
        match self.recommender.recommend(&self.ui.form.selection) {
            Ok(recommendation) => {
                self.ui.result.show_course(&recommendation.course);
                self.set_status(
                    format!("Recommended {}", recommendation.course),
                    StatusTone::Info,
                );
            }
            Err(RecommendError::ModelUnavailable) => {
                self.set_status("No model loaded", StatusTone::Error);
                self.show_notice(Notice::error(
                    "Please load data and train the model first!",
                ));
            }
        }
    }
}
