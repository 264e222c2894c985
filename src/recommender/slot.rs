/// Whether a classifier is available for predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    NoModel,
    Loaded,
}

/// Explicitly owned holder for the active model.
///
/// The model is only ever swapped as a whole, so readers see either the previous
/// model or the new one.
#[derive(Debug, Clone)]
pub struct ModelSlot<M> {
    active: Option<M>,
}

impl<M> Default for ModelSlot<M> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<M> ModelSlot<M> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ModelStatus {
        if self.active.is_some() {
            ModelStatus::Loaded
        } else {
            ModelStatus::NoModel
        }
    }

    pub fn get(&self) -> Option<&M> {
        self.active.as_ref()
    }

    /// Install a new model, returning the one it replaced.
    pub fn replace(&mut self, model: M) -> Option<M> {
        self.active.replace(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_swaps_whole_value() {
        let mut slot = ModelSlot::empty();
        assert_eq!(slot.status(), ModelStatus::NoModel);
        assert_eq!(slot.replace(1u8), None);
        assert_eq!(slot.status(), ModelStatus::Loaded);
        assert_eq!(slot.replace(2u8), Some(1));
        assert_eq!(slot.get(), Some(&2));
    }
}
