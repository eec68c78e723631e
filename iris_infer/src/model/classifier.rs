//! Linear iris classifier
//!
//! A pre-trained multiclass linear model: one weight row and one
//! intercept per class, prediction by row-wise argmax over the decision
//! scores. The predictor takes a batch dimension even for one sample.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::utils::error::{IrisError, Result};

/// Number of input features per sample
/// (sepal length, sepal width, petal length, petal width)
pub const NUM_FEATURES: usize = 4;

/// A trained linear classifier over iris feature vectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrisClassifier {
    /// Per-class weight rows, shape (n_classes, n_features)
    weights: Array2<f64>,
    /// Per-class intercepts, length n_classes
    intercepts: Array1<f64>,
}

impl IrisClassifier {
    /// Build a classifier from trained parameters
    ///
    /// Fails if the weight matrix and intercept vector disagree on the
    /// number of classes, or if either dimension is empty.
    pub fn from_parts(weights: Array2<f64>, intercepts: Array1<f64>) -> Result<Self> {
        if weights.nrows() != intercepts.len() {
            return Err(IrisError::Model(format!(
                "weight matrix has {} rows but there are {} intercepts",
                weights.nrows(),
                intercepts.len()
            )));
        }
        if weights.nrows() == 0 || weights.ncols() == 0 {
            return Err(IrisError::Model("empty weight matrix".to_string()));
        }
        Ok(Self {
            weights,
            intercepts,
        })
    }

    /// Number of output classes
    pub fn n_classes(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of input features per sample
    pub fn n_features(&self) -> usize {
        self.weights.ncols()
    }

    /// Per-class decision scores for a batch, shape (batch, n_classes)
    fn decision_scores(&self, batch: &Array2<f64>) -> Array2<f64> {
        batch.dot(&self.weights.t()) + &self.intercepts
    }

    /// Predict the class index for every row of a (batch, n_features) matrix
    pub fn predict(&self, batch: &Array2<f64>) -> Result<Vec<usize>> {
        if batch.ncols() != self.n_features() {
            return Err(IrisError::InvalidInput(format!(
                "expected {} features per sample, got {}",
                self.n_features(),
                batch.ncols()
            )));
        }

        let scores = self.decision_scores(batch);
        Ok(scores
            .rows()
            .into_iter()
            .map(|row| argmax(row.iter().copied()))
            .collect())
    }

    /// Predict a single sample given as a flat feature slice
    pub fn predict_one(&self, features: &[f64]) -> Result<usize> {
        // converts shape (n,) to (1, n): the predictor is batch-oriented
        let batch = Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| IrisError::InvalidInput(e.to_string()))?;
        Ok(self.predict(&batch)?[0])
    }
}

/// Index of the largest score; ties resolve to the first maximum
fn argmax(scores: impl Iterator<Item = f64>) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, score) in scores.enumerate() {
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Coarse petal-length separators: setosa below 2.5, virginica
    /// above 4.9, versicolour in between.
    fn petal_rule_classifier() -> IrisClassifier {
        let weights: Array2<f64> = array![
            [0.0, 0.0, -1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ];
        let intercepts: Array1<f64> = array![2.5, 0.0, -4.9];
        IrisClassifier::from_parts(weights, intercepts).unwrap()
    }

    #[test]
    fn test_from_parts_rejects_shape_mismatch() {
        let weights: Array2<f64> = Array2::zeros((3, 4));
        let intercepts: Array1<f64> = Array1::zeros(2);
        let result = IrisClassifier::from_parts(weights, intercepts);
        assert!(matches!(result, Err(IrisError::Model(_))));
    }

    #[test]
    fn test_from_parts_rejects_empty() {
        let weights: Array2<f64> = Array2::zeros((0, 4));
        let intercepts: Array1<f64> = Array1::zeros(0);
        assert!(IrisClassifier::from_parts(weights, intercepts).is_err());
    }

    #[test]
    fn test_predict_batch() {
        let classifier = petal_rule_classifier();
        let batch: Array2<f64> = array![
            [5.1, 3.5, 1.4, 0.2],
            [5.9, 3.0, 4.2, 1.5],
            [6.7, 3.0, 5.2, 2.3],
        ];
        assert_eq!(classifier.predict(&batch).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_predict_one() {
        let classifier = petal_rule_classifier();
        assert_eq!(classifier.predict_one(&[5.1, 3.5, 1.4, 0.2]).unwrap(), 0);
        assert_eq!(classifier.predict_one(&[6.7, 3.0, 5.2, 2.3]).unwrap(), 2);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let classifier = petal_rule_classifier();
        let first = classifier.predict_one(&[5.9, 3.0, 4.2, 1.5]).unwrap();
        let second = classifier.predict_one(&[5.9, 3.0, 4.2, 1.5]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_predict_rejects_wrong_arity() {
        let classifier = petal_rule_classifier();
        let result = classifier.predict_one(&[1.0, 2.0]);
        assert!(matches!(result, Err(IrisError::InvalidInput(_))));
    }

    #[test]
    fn test_argmax_first_maximum_wins() {
        assert_eq!(argmax([1.0, 1.0, 0.5].into_iter()), 0);
        assert_eq!(argmax([0.0, 2.0, 2.0].into_iter()), 1);
    }

    #[test]
    fn test_shape_accessors() {
        let classifier = petal_rule_classifier();
        assert_eq!(classifier.n_classes(), 3);
        assert_eq!(classifier.n_features(), 4);
    }
}
