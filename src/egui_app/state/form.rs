use crate::interests::InterestSelection;

/// Text shown before the first recommendation.
pub const RESULT_PLACEHOLDER: &str = "Your recommended course will appear here";

/// Checkbox state for the interest form.
#[derive(Clone, Debug, Default)]
pub struct InterestFormState {
    pub selection: InterestSelection,
    /// Index into the interest groups of the visible tab.
    pub active_tab: usize,
}

/// Output area under the action buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationState {
    pub text: String,
    /// Course of the last successful prediction.
    pub course: Option<String>,
}

impl Default for RecommendationState {
    fn default() -> Self {
        Self {
            text: RESULT_PLACEHOLDER.to_string(),
            course: None,
        }
    }
}

impl RecommendationState {
    pub fn show_course(&mut self, course: &str) {
        self.text = format!("Based on your interests, we recommend:\n\n{course}");
        self.course = Some(course.to_string());
    }
}
