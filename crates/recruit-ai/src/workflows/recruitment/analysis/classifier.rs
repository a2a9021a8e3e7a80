//! Three-class candidate classifier.
//!
//! The production model is a decision forest trained offline and exported as JSON. It is
//! loaded once when the process starts and shared read-only afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::vectorize::{FeatureVector, FEATURE_COUNT};

pub const CLASS_COUNT: usize = 3;

/// Model output classes, encoded 0/1/2 in the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateClass {
    Rejected,
    Accepted,
    PreEmployment,
}

impl CandidateClass {
    pub const fn code(self) -> u8 {
        match self {
            CandidateClass::Rejected => 0,
            CandidateClass::Accepted => 1,
            CandidateClass::PreEmployment => 2,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CandidateClass::Rejected),
            1 => Some(CandidateClass::Accepted),
            2 => Some(CandidateClass::PreEmployment),
            _ => None,
        }
    }
}

/// Scores feature rows; implementations must return exactly one class per row.
pub trait CandidateClassifier: Send + Sync {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<CandidateClass>, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier returned {actual} predictions for {expected} candidates")]
    PredictionCountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid model artifact: {0}")]
    Format(#[from] serde_json::Error),
    #[error("model artifact contains no trees")]
    Empty,
    #[error("tree {tree}, node {node}: {reason}")]
    InvalidNode {
        tree: usize,
        node: usize,
        reason: String,
    },
}

/// Deserializing always validates, so every forest in memory is walkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawForest")]
pub struct DecisionForest {
    name: String,
    trees: Vec<DecisionTree>,
}

#[derive(Debug, Deserialize)]
struct RawForest {
    #[serde(default)]
    name: String,
    trees: Vec<DecisionTree>,
}

impl TryFrom<RawForest> for DecisionForest {
    type Error = ModelError;

    fn try_from(raw: RawForest) -> Result<Self, Self::Error> {
        let forest = Self {
            name: raw.name,
            trees: raw.trees,
        };
        forest.validate()?;
        Ok(forest)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

/// Split nodes send a row left when `row[feature] <= threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        distribution: [f64; CLASS_COUNT],
    },
}

impl DecisionForest {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let forest = Self::from_json(&raw)?;
        info!(
            model = %forest.name(),
            trees = forest.trees().len(),
            path = %path.display(),
            "candidate classifier loaded"
        );
        Ok(forest)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let raw: RawForest = serde_json::from_str(raw)?;
        Self::try_from(raw)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Children must come after their parent, which also guarantees every walk terminates.
    fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Empty);
        }

        for (tree_index, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::InvalidNode {
                    tree: tree_index,
                    node: 0,
                    reason: "tree has no nodes".to_string(),
                });
            }

            for (node_index, node) in tree.nodes.iter().enumerate() {
                let invalid = |reason: String| ModelError::InvalidNode {
                    tree: tree_index,
                    node: node_index,
                    reason,
                };
                match node {
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= FEATURE_COUNT {
                            return Err(invalid(format!("feature index {feature} out of range")));
                        }
                        if !threshold.is_finite() {
                            return Err(invalid("threshold is not finite".to_string()));
                        }
                        for child in [*left, *right] {
                            if child <= node_index || child >= tree.nodes.len() {
                                return Err(invalid(format!("child index {child} out of order")));
                            }
                        }
                    }
                    TreeNode::Leaf { distribution } => {
                        if distribution
                            .iter()
                            .any(|weight| !weight.is_finite() || *weight < 0.0)
                        {
                            return Err(invalid("leaf weights must be non-negative".to_string()));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Average the leaf distributions across trees; ties go to the lowest class code.
    pub fn predict_one(&self, vector: &FeatureVector) -> CandidateClass {
        let row = vector.to_row();
        let mut totals = [0.0_f64; CLASS_COUNT];

        for tree in &self.trees {
            let distribution = tree.distribution(&row);
            for (total, weight) in totals.iter_mut().zip(distribution) {
                *total += weight;
            }
        }

        let mut best = 0;
        for (index, total) in totals.iter().enumerate().skip(1) {
            if *total > totals[best] {
                best = index;
            }
        }

        CandidateClass::from_code(best as u8).unwrap_or(CandidateClass::Rejected)
    }
}

impl DecisionTree {
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// A walk visits each node at most once; broken links yield an all-zero vote.
    fn distribution(&self, row: &[f64; FEATURE_COUNT]) -> [f64; CLASS_COUNT] {
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            let Some(node) = self.nodes.get(index) else {
                break;
            };
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let Some(value) = row.get(*feature) else {
                        break;
                    };
                    index = if *value <= *threshold { *left } else { *right };
                }
                TreeNode::Leaf { distribution } => return *distribution,
            }
        }
        [0.0; CLASS_COUNT]
    }
}

impl CandidateClassifier for DecisionForest {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<CandidateClass>, ClassifierError> {
        Ok(rows.iter().map(|row| self.predict_one(row)).collect())
    }
}
