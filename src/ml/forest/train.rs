use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::model::{DecisionTree, RandomForest, TreeNode};

/// How many features each split examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    /// `floor(sqrt(feature_len))`, at least one.
    Sqrt,
    /// Every feature.
    All,
    /// A fixed count, clamped to `1..=feature_len`.
    Fixed(usize),
}

impl MaxFeatures {
    fn resolve(self, feature_len: usize) -> usize {
        let count = match self {
            Self::Sqrt => (feature_len as f64).sqrt().floor() as usize,
            Self::All => feature_len,
            Self::Fixed(count) => count,
        };
        count.clamp(1, feature_len.max(1))
    }
}

/// Training hyperparameters for the forest.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestOptions {
    /// Number of trees in the ensemble.
    pub n_trees: usize,
    /// Seed for bootstrap sampling and feature subsampling.
    pub seed: u64,
    /// Maximum tree depth; `None` grows until leaves are pure.
    pub max_depth: Option<usize>,
    /// Nodes with fewer rows than this become leaves.
    pub min_samples_split: usize,
    pub max_features: MaxFeatures,
}

impl Default for ForestOptions {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
            max_depth: None,
            min_samples_split: 2,
            max_features: MaxFeatures::Sqrt,
        }
    }
}

/// In-memory dataset used for training.
#[derive(Debug, Clone)]
pub struct TrainDataset {
    /// Number of `f32` values in each feature vector.
    pub feature_len: usize,
    pub n_classes: usize,
    /// Feature matrix, row-major.
    pub x: Vec<Vec<f32>>,
    /// Class indices aligned with `x`.
    pub y: Vec<usize>,
}

/// Train a bagged forest of Gini decision trees.
pub fn train_random_forest(
    dataset: &TrainDataset,
    options: &ForestOptions,
) -> Result<RandomForest, String> {
    if dataset.x.len() != dataset.y.len() {
        return Err("Mismatched X/Y lengths".to_string());
    }
    if dataset.x.is_empty() {
        return Err("Empty dataset".to_string());
    }
    if dataset.n_classes == 0 {
        return Err("Need at least 1 class".to_string());
    }
    if options.n_trees == 0 {
        return Err("Need at least 1 tree".to_string());
    }
    if let Some(row) = dataset.x.iter().position(|row| row.len() != dataset.feature_len) {
        return Err(format!(
            "Row {row} has {} features but expected {}",
            dataset.x[row].len(),
            dataset.feature_len
        ));
    }
    if let Some(&label) = dataset.y.iter().find(|&&label| label >= dataset.n_classes) {
        return Err(format!("Label {label} out of range for {} classes", dataset.n_classes));
    }

    let n = dataset.x.len();
    let builder = TreeBuilder {
        x: &dataset.x,
        y: &dataset.y,
        n_classes: dataset.n_classes,
        feature_len: dataset.feature_len,
        max_features: options.max_features.resolve(dataset.feature_len),
        max_depth: options.max_depth,
        min_samples_split: options.min_samples_split.max(2),
    };

    let mut master = StdRng::seed_from_u64(options.seed);
    let mut trees = Vec::with_capacity(options.n_trees);
    for _ in 0..options.n_trees {
        let mut rng = StdRng::seed_from_u64(master.random::<u64>());
        let mut samples: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
        trees.push(builder.grow(&mut samples, &mut rng));
    }

    Ok(RandomForest {
        feature_len: dataset.feature_len,
        n_classes: dataset.n_classes,
        trees,
    })
}

struct TreeBuilder<'a> {
    x: &'a [Vec<f32>],
    y: &'a [usize],
    n_classes: usize,
    feature_len: usize,
    max_features: usize,
    max_depth: Option<usize>,
    min_samples_split: usize,
}

#[derive(Debug, Clone, Copy)]
struct Split {
    feature: usize,
    threshold: f32,
    score: f64,
}

impl TreeBuilder<'_> {
    fn grow(&self, samples: &mut [usize], rng: &mut StdRng) -> DecisionTree {
        let mut nodes = Vec::new();
        self.build_node(&mut nodes, samples, 0, rng);
        DecisionTree { nodes }
    }

    fn build_node(
        &self,
        nodes: &mut Vec<TreeNode>,
        samples: &mut [usize],
        depth: usize,
        rng: &mut StdRng,
    ) -> u32 {
        let node_idx = nodes.len();
        let counts = self.class_counts(samples);
        let leaf = TreeNode::Leaf {
            distribution: distribution(&counts, samples.len()),
        };
        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let depth_reached = self.max_depth.is_some_and(|max| depth >= max);
        if pure || depth_reached || samples.len() < self.min_samples_split {
            nodes.push(leaf);
            return node_idx as u32;
        }
        let Some(split) = self.best_split(samples, &counts, rng) else {
            nodes.push(leaf);
            return node_idx as u32;
        };

        // Reserve the slot so children get larger indices than their parent.
        nodes.push(leaf);
        samples.sort_by_key(|&row| self.x[row][split.feature] > split.threshold);
        let mid = samples
            .iter()
            .take_while(|&&row| self.x[row][split.feature] <= split.threshold)
            .count();
        let (left_rows, right_rows) = samples.split_at_mut(mid);
        let left = self.build_node(nodes, left_rows, depth + 1, rng);
        let right = self.build_node(nodes, right_rows, depth + 1, rng);
        nodes[node_idx] = TreeNode::Split {
            feature: split.feature as u16,
            threshold: split.threshold,
            left,
            right,
        };
        node_idx as u32
    }

    fn class_counts(&self, samples: &[usize]) -> Vec<u32> {
        let mut counts = vec![0u32; self.n_classes];
        for &row in samples {
            counts[self.y[row]] += 1;
        }
        counts
    }

    /// Visit features in random order until `max_features` non-constant ones were scored.
    fn best_split(&self, samples: &[usize], counts: &[u32], rng: &mut StdRng) -> Option<Split> {
        let mut order: Vec<usize> = (0..self.feature_len).collect();
        order.shuffle(rng);
        let mut evaluated = 0usize;
        let mut best: Option<Split> = None;
        for feature in order {
            if evaluated >= self.max_features {
                break;
            }
            let Some(candidate) = self.best_threshold(samples, counts, feature) else {
                continue;
            };
            evaluated += 1;
            if best.is_none_or(|current| candidate.score > current.score) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Best Gini threshold for one feature, or `None` when the feature is constant here.
    ///
    /// Scores are `sum(left_c^2)/n_left + sum(right_c^2)/n_right`; maximizing it
    /// minimizes the weighted Gini impurity of the children.
    fn best_threshold(&self, samples: &[usize], counts: &[u32], feature: usize) -> Option<Split> {
        let mut pairs: Vec<(f32, usize)> = samples
            .iter()
            .map(|&row| (self.x[row][feature], self.y[row]))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let first = pairs.first()?.0;
        let last = pairs.last()?.0;
        if first == last {
            return None;
        }

        let total = pairs.len();
        let mut left = vec![0u32; self.n_classes];
        let mut right = counts.to_vec();
        let mut left_sq = 0f64;
        let mut right_sq: f64 = right.iter().map(|&c| (c as f64) * (c as f64)).sum();
        let mut best: Option<Split> = None;

        for k in 0..total - 1 {
            let (value, class) = pairs[k];
            left_sq += 2.0 * left[class] as f64 + 1.0;
            left[class] += 1;
            right_sq -= 2.0 * right[class] as f64 - 1.0;
            right[class] -= 1;

            let next = pairs[k + 1].0;
            if next <= value {
                continue;
            }
            let n_left = (k + 1) as f64;
            let n_right = (total - k - 1) as f64;
            let score = left_sq / n_left + right_sq / n_right;
            if best.is_none_or(|current| score > current.score) {
                best = Some(Split {
                    feature,
                    threshold: midpoint(value, next),
                    score,
                });
            }
        }
        best
    }
}

fn midpoint(low: f32, high: f32) -> f32 {
    let mid = low + (high - low) / 2.0;
    if mid >= high { low } else { mid }
}

fn distribution(counts: &[u32], total: usize) -> Vec<f32> {
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&c| c as f32 / total as f32)
        .collect()
}
