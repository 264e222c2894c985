use serde::{Deserialize, Serialize};

/// Node of a flattened decision tree. Children are indices into the owning tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node: `feature <= threshold` goes left, otherwise right.
    Split {
        feature: u16,
        threshold: f32,
        left: u32,
        right: u32,
    },
    /// Terminal node holding the class distribution of its training rows.
    Leaf { distribution: Vec<f32> },
}

/// Single decision tree; node `0` is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf and return its class distribution.
    pub fn leaf_distribution(&self, features: &[f32]) -> &[f32] {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { distribution } => return distribution,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature as usize).copied().unwrap_or(0.0);
                    idx = if value <= *threshold {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[TreeNode], idx: usize) -> usize {
            match &nodes[idx] {
                TreeNode::Leaf { .. } => 0,
                TreeNode::Split { left, right, .. } => {
                    1 + walk(nodes, *left as usize).max(walk(nodes, *right as usize))
                }
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, 0)
        }
    }

    /// Check node references and leaf widths.
    ///
    /// Children must point strictly forward, which also rules out cycles.
    pub fn validate(&self, n_classes: usize, feature_len: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("Tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Leaf { distribution } => {
                    if distribution.len() != n_classes {
                        return Err(format!(
                            "Leaf {idx} has {} class weights but expected {n_classes}",
                            distribution.len()
                        ));
                    }
                }
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature as usize >= feature_len {
                        return Err(format!("Node {idx} splits on missing feature {feature}"));
                    }
                    for child in [*left as usize, *right as usize] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("Node {idx} has invalid child {child}"));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Bagged ensemble of decision trees with soft voting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Number of `f32` values per feature vector.
    pub feature_len: usize,
    pub n_classes: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Validate structural invariants of the forest.
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("Forest has no trees".to_string());
        }
        if self.n_classes == 0 {
            return Err("Forest has no classes".to_string());
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_classes, self.feature_len)
                .map_err(|err| format!("Tree {tree_idx}: {err}"))?;
        }
        Ok(())
    }

    /// Mean class distribution across all trees.
    pub fn predict_proba(&self, features: &[f32]) -> Vec<f32> {
        let mut totals = vec![0.0f32; self.n_classes];
        if self.trees.is_empty() {
            return totals;
        }
        for tree in &self.trees {
            for (total, weight) in totals.iter_mut().zip(tree.leaf_distribution(features)) {
                *total += weight;
            }
        }
        let scale = 1.0 / self.trees.len() as f32;
        for total in &mut totals {
            *total *= scale;
        }
        totals
    }

    /// Predict the best class index; ties go to the lowest index.
    pub fn predict_class_index(&self, features: &[f32]) -> usize {
        argmax(&self.predict_proba(features))
    }
}

fn argmax(values: &[f32]) -> usize {
    let mut best_idx = 0usize;
    let mut best_val = f32::NEG_INFINITY;
    for (idx, &v) in values.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: u16, left: Vec<f32>, right: Vec<f32>) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold: 0.5,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { distribution: left },
                TreeNode::Leaf {
                    distribution: right,
                },
            ],
        }
    }

    #[test]
    fn tree_follows_threshold() {
        let tree = stump(1, vec![1.0, 0.0], vec![0.0, 1.0]);
        assert_eq!(tree.leaf_distribution(&[1.0, 0.0]), &[1.0, 0.0]);
        assert_eq!(tree.leaf_distribution(&[0.0, 0.5]), &[1.0, 0.0]);
        assert_eq!(tree.leaf_distribution(&[0.0, 1.0]), &[0.0, 1.0]);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn forest_averages_votes() {
        let forest = RandomForest {
            feature_len: 2,
            n_classes: 2,
            trees: vec![
                stump(0, vec![1.0, 0.0], vec![0.0, 1.0]),
                stump(1, vec![1.0, 0.0], vec![0.2, 0.8]),
            ],
        };
        forest.validate().unwrap();
        let proba = forest.predict_proba(&[1.0, 1.0]);
        assert!((proba[0] - 0.1).abs() < 1e-6);
        assert!((proba[1] - 0.9).abs() < 1e-6);
        assert_eq!(forest.predict_class_index(&[1.0, 1.0]), 1);
        assert_eq!(forest.predict_class_index(&[0.0, 0.0]), 0);
    }

    #[test]
    fn ties_resolve_to_lowest_class() {
        let forest = RandomForest {
            feature_len: 1,
            n_classes: 2,
            trees: vec![
                stump(0, vec![1.0, 0.0], vec![1.0, 0.0]),
                stump(0, vec![0.0, 1.0], vec![0.0, 1.0]),
            ],
        };
        assert_eq!(forest.predict_class_index(&[0.0]), 0);
    }

    #[test]
    fn validate_rejects_backward_children() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 0.5,
                    left: 0,
                    right: 1,
                },
                TreeNode::Leaf {
                    distribution: vec![1.0],
                },
            ],
        };
        assert!(tree.validate(1, 1).is_err());
    }

    #[test]
    fn validate_rejects_wrong_leaf_width() {
        let tree = stump(0, vec![1.0], vec![0.0, 1.0]);
        assert!(tree.validate(2, 1).is_err());
        assert!(stump(3, vec![1.0, 0.0], vec![0.0, 1.0]).validate(2, 2).is_err());
    }
}
