//! Deterministic random-forest classifier.
//!
//! Bagged Gini decision trees with per-split feature subsampling:
//! - Bootstrap rows and split features are drawn from a seeded RNG, so a given
//!   dataset and seed always produce the same forest.
//! - Trees are stored flattened and serialize to JSON with serde.
//! - Prediction averages leaf class distributions (soft voting).

mod model;
mod train;

pub use model::{DecisionTree, RandomForest, TreeNode};
pub use train::{ForestOptions, MaxFeatures, TrainDataset, train_random_forest};
