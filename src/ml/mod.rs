//! Machine learning building blocks for training and inference.

pub mod forest;
pub mod metrics;

/// Anything that maps a feature slice to a class index and names its classes.
pub trait Classifier {
    /// Predict the best class index for a feature vector.
    fn predict_class_index(&self, features: &[f32]) -> usize;

    /// Human-readable label for a class index, if the model knows it.
    fn class_label(&self, index: usize) -> Option<&str>;
}
