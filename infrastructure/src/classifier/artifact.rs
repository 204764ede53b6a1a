//! JSON model artifact format
//!
//! An artifact carries its input schema (schema id and ordered feature
//! names), the class labels, and one of three model kinds:
//!
//! ```json
//! {
//!   "schema_id": "disease-symptom-132/v1",
//!   "features": ["itching", "skin_rash", "..."],
//!   "classes": ["Fungal infection", "Allergy", "..."],
//!   "model": { "kind": "tree", "nodes": [ { "feature": 0, "threshold": 0.5, "left": 1, "right": 2 }, { "class": 1 }, { "class": 0 } ] }
//! }
//! ```
//!
//! - `linear`: one coefficient row and intercept per class, prediction is the argmax score
//! - `tree`: binary decision tree, `x[feature] <= threshold` goes left
//! - `forest`: several trees, majority vote (ties go to the lowest class index)

use early_detect_domain::SchemaDescriptor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while decoding or evaluating an artifact
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Invalid artifact JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed model: {0}")]
    Malformed(String),

    #[error("Expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelKind {
    Linear {
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
    Tree {
        nodes: Vec<TreeNode>,
    },
    Forest {
        trees: Vec<Vec<TreeNode>>,
    },
}

/// A decoded and validated model artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub schema_id: String,
    pub features: Vec<String>,
    pub classes: Vec<String>,
    pub model: ModelKind,
}

impl ModelArtifact {
    /// Decode from JSON and validate the model's internal consistency.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn schema(&self) -> SchemaDescriptor {
        SchemaDescriptor::new(self.schema_id.clone(), self.features.clone())
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::Malformed("no classes".into()));
        }
        let n_features = self.features.len();
        let n_classes = self.classes.len();

        match &self.model {
            ModelKind::Linear {
                coefficients,
                intercepts,
            } => {
                if coefficients.len() != n_classes || intercepts.len() != n_classes {
                    return Err(ArtifactError::Malformed(format!(
                        "linear model has {} coefficient rows and {} intercepts for {} classes",
                        coefficients.len(),
                        intercepts.len(),
                        n_classes
                    )));
                }
                if let Some(row) = coefficients.iter().find(|r| r.len() != n_features) {
                    return Err(ArtifactError::Malformed(format!(
                        "coefficient row has {} entries for {} features",
                        row.len(),
                        n_features
                    )));
                }
            }
            ModelKind::Tree { nodes } => validate_tree(nodes, n_features, n_classes)?,
            ModelKind::Forest { trees } => {
                if trees.is_empty() {
                    return Err(ArtifactError::Malformed("forest has no trees".into()));
                }
                for nodes in trees {
                    validate_tree(nodes, n_features, n_classes)?;
                }
            }
        }
        Ok(())
    }

    /// Predict the class label for one row.
    pub fn predict(&self, row: &[f64]) -> Result<&str, ArtifactError> {
        if row.len() != self.features.len() {
            return Err(ArtifactError::FeatureCount {
                expected: self.features.len(),
                actual: row.len(),
            });
        }

        let class = match &self.model {
            ModelKind::Linear {
                coefficients,
                intercepts,
            } => argmax(coefficients.iter().zip(intercepts).map(|(w, b)| {
                w.iter().zip(row).map(|(w, x)| w * x).sum::<f64>() + b
            })),
            ModelKind::Tree { nodes } => eval_tree(nodes, row)?,
            ModelKind::Forest { trees } => {
                let mut votes = vec![0usize; self.classes.len()];
                for nodes in trees {
                    votes[eval_tree(nodes, row)?] += 1;
                }
                argmax(votes.into_iter().map(|v| v as f64))
            }
        };

        Ok(&self.classes[class])
    }
}

fn validate_tree(nodes: &[TreeNode], n_features: usize, n_classes: usize) -> Result<(), ArtifactError> {
    if nodes.is_empty() {
        return Err(ArtifactError::Malformed("tree has no nodes".into()));
    }
    for (i, node) in nodes.iter().enumerate() {
        match *node {
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => {
                if feature >= n_features {
                    return Err(ArtifactError::Malformed(format!(
                        "node {} splits on feature {} of {}",
                        i, feature, n_features
                    )));
                }
                // Children must come after their parent, which rules out cycles.
                if left <= i || right <= i || left >= nodes.len() || right >= nodes.len() {
                    return Err(ArtifactError::Malformed(format!(
                        "node {} has invalid children {} / {}",
                        i, left, right
                    )));
                }
            }
            TreeNode::Leaf { class } => {
                if class >= n_classes {
                    return Err(ArtifactError::Malformed(format!(
                        "leaf {} predicts class {} of {}",
                        i, class, n_classes
                    )));
                }
            }
        }
    }
    Ok(())
}

fn eval_tree(nodes: &[TreeNode], row: &[f64]) -> Result<usize, ArtifactError> {
    let mut index = 0;
    loop {
        match nodes.get(index) {
            Some(TreeNode::Leaf { class }) => return Ok(*class),
            Some(TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            }) => {
                index = if row[*feature] <= *threshold {
                    *left
                } else {
                    *right
                };
            }
            None => {
                return Err(ArtifactError::Malformed(format!(
                    "node index {} out of range",
                    index
                )));
            }
        }
    }
}

/// Index of the largest value; the first one wins on ties.
fn argmax(values: impl Iterator<Item = f64>) -> usize {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, v) in values.enumerate() {
        if v > best.1 {
            best = (i, v);
        }
    }
    best.0
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Three-feature tree: itching -> "Fungal infection", else chills -> "Malaria", else "Allergy".
    pub(crate) fn tree_json(features: &[&str]) -> String {
        json!({
            "schema_id": "test/v1",
            "features": features,
            "classes": ["Allergy", "Fungal infection", "Malaria"],
            "model": {
                "kind": "tree",
                "nodes": [
                    { "feature": 0, "threshold": 0.5, "left": 1, "right": 4 },
                    { "feature": 2, "threshold": 0.5, "left": 2, "right": 3 },
                    { "class": 0 },
                    { "class": 2 },
                    { "class": 1 }
                ]
            }
        })
        .to_string()
    }

    #[test]
    fn test_tree_prediction() {
        let artifact = ModelArtifact::from_json(&tree_json(&["itching", "skin_rash", "chills"])).unwrap();
        assert_eq!(artifact.predict(&[1.0, 0.0, 0.0]).unwrap(), "Fungal infection");
        assert_eq!(artifact.predict(&[0.0, 0.0, 1.0]).unwrap(), "Malaria");
        assert_eq!(artifact.predict(&[0.0, 1.0, 0.0]).unwrap(), "Allergy");
    }

    #[test]
    fn test_linear_prediction() {
        let json = json!({
            "features": ["a", "b"],
            "classes": ["A", "B"],
            "model": {
                "kind": "linear",
                "coefficients": [[2.0, 0.0], [0.0, 2.0]],
                "intercepts": [0.0, 0.5]
            }
        })
        .to_string();
        let artifact = ModelArtifact::from_json(&json).unwrap();
        assert_eq!(artifact.schema().id, "");
        assert_eq!(artifact.predict(&[1.0, 0.0]).unwrap(), "A");
        assert_eq!(artifact.predict(&[0.0, 1.0]).unwrap(), "B");
        assert_eq!(artifact.predict(&[0.0, 0.0]).unwrap(), "B");
    }

    #[test]
    fn test_forest_majority_vote() {
        let json = json!({
            "features": ["a"],
            "classes": ["A", "B"],
            "model": {
                "kind": "forest",
                "trees": [
                    [{ "class": 1 }],
                    [{ "feature": 0, "threshold": 0.5, "left": 1, "right": 2 }, { "class": 0 }, { "class": 1 }],
                    [{ "class": 0 }]
                ]
            }
        })
        .to_string();
        let artifact = ModelArtifact::from_json(&json).unwrap();
        assert_eq!(artifact.predict(&[1.0]).unwrap(), "B");
        assert_eq!(artifact.predict(&[0.0]).unwrap(), "A");
    }

    #[test]
    fn test_wrong_row_length() {
        let artifact = ModelArtifact::from_json(&tree_json(&["a", "b", "c"])).unwrap();
        let err = artifact.predict(&[1.0, 0.0]).unwrap_err();
        assert!(matches!(err, ArtifactError::FeatureCount { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_rejects_backward_child_reference() {
        let json = json!({
            "features": ["a"],
            "classes": ["A"],
            "model": { "kind": "tree", "nodes": [{ "feature": 0, "threshold": 0.5, "left": 0, "right": 1 }, { "class": 0 }] }
        })
        .to_string();
        assert!(matches!(
            ModelArtifact::from_json(&json),
            Err(ArtifactError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_mismatched_linear_shapes() {
        let json = json!({
            "features": ["a", "b"],
            "classes": ["A", "B"],
            "model": { "kind": "linear", "coefficients": [[1.0, 0.0], [0.0]], "intercepts": [0.0, 0.0] }
        })
        .to_string();
        assert!(ModelArtifact::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(
            ModelArtifact::from_json("{ not json"),
            Err(ArtifactError::Json(_))
        ));
    }
}
