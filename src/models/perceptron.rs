use rayon::prelude::*;

use crate::config::PerceptronConfig;
use crate::error::ClassifierError;
use crate::math::{vector, Array1, Array2};
use crate::models::classifier_trait::BinaryClassifier;

/// Online perceptron for binary classification.
///
/// Owns a weight vector and bias updated in place by the classic perceptron
/// learning rule: for each sample, in dataset order, the linear score is
/// thresholded through a step activation and the weights are nudged by
/// `learning_rate * (label - predicted)`. Training always runs the full
/// epoch budget and always restarts from all-zero weights; calling
/// [`Perceptron::train`] twice discards whatever the first call learned.
#[derive(Debug)]
pub struct Perceptron {
    config: PerceptronConfig,
    weights: Array1<f32>,
    bias: f32,
    trained: bool,
}

/// Step activation: scores at exactly zero classify as 1.
#[inline]
fn unit_step(score: f32) -> u8 {
    if score >= 0.0 {
        1
    } else {
        0
    }
}

impl Perceptron {
    /// Create an untrained perceptron. Fails with `InvalidConfiguration`
    /// when the learning rate or epoch count is not positive.
    pub fn new(config: PerceptronConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        Ok(Perceptron {
            config,
            weights: Array1::from_vec(Vec::new()),
            bias: 0.0,
            trained: false,
        })
    }

    pub fn config(&self) -> &PerceptronConfig {
        &self.config
    }

    /// Learned weights, one per feature column. Empty before training.
    pub fn weights(&self) -> &[f32] {
        self.weights.as_slice()
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Fit the perceptron on `x` (n rows of d features) and `y` (n labels
    /// in {0, 1}).
    ///
    /// Weights and bias are reset to zero first; there is no warm start.
    /// Updates run strictly in sample order within each epoch, each one
    /// depending on the previous, so the loop must never be reordered or
    /// batched. All epochs run even if the weights stop changing.
    pub fn train(&mut self, x: &Array2<f32>, y: &[u8]) -> Result<(), ClassifierError> {
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 {
            return Err(ClassifierError::DimensionMismatch(
                "training requires at least one sample row".to_string(),
            ));
        }
        if y.len() != n_samples {
            return Err(ClassifierError::DimensionMismatch(format!(
                "feature matrix has {} rows but label vector has {} entries",
                n_samples,
                y.len()
            )));
        }

        self.weights = Array1::zeros(n_features);
        self.bias = 0.0;

        let lr = self.config.learning_rate;
        for epoch in 0..self.config.epochs {
            let mut mistakes = 0usize;
            for i in 0..n_samples {
                let row = x.row_slice(i);
                let score = self.weights.dot(row) + self.bias;
                let predicted = unit_step(score);
                let update = lr * (f32::from(y[i]) - f32::from(predicted));
                if y[i] != predicted {
                    mistakes += 1;
                }
                for (w, &feature) in self.weights.iter_mut().zip(row) {
                    *w += update * feature;
                }
                self.bias += update;
            }
            log::trace!(
                "epoch {}/{}: {} misclassified of {}",
                epoch + 1,
                self.config.epochs,
                mistakes,
                n_samples
            );
        }
        self.trained = true;
        log::debug!(
            "trained perceptron on {} samples x {} features over {} epochs (lr={})",
            n_samples,
            n_features,
            self.config.epochs,
            lr
        );
        Ok(())
    }

    /// Predict a 0/1 label for every row of `x`, in row order.
    ///
    /// Pure read-only pass over the current weights. Rows carry no shared
    /// mutable state, so they are scored in parallel. On a never-trained
    /// perceptron every score is exactly zero and every row classifies as
    /// 1, which is well-defined but rarely what a caller wants.
    pub fn infer(&self, x: &Array2<f32>) -> Result<Array1<u8>, ClassifierError> {
        let (n_samples, n_features) = x.shape();
        if self.trained && n_features != self.weights.len() {
            return Err(ClassifierError::DimensionMismatch(format!(
                "input rows have {} features but the model was trained on {}",
                n_features,
                self.weights.len()
            )));
        }
        if !self.trained {
            return Ok(Array1::from_elem(n_samples, 1u8));
        }

        let weights = self.weights.as_slice();
        let bias = self.bias;
        let labels: Vec<u8> = (0..n_samples)
            .into_par_iter()
            .map(|i| unit_step(vector::dot(x.row_slice(i), weights) + bias))
            .collect();
        Ok(Array1::from_vec(labels))
    }
}

impl BinaryClassifier for Perceptron {
    fn fit(&mut self, x: &Array2<f32>, y: &[u8]) -> Result<(), ClassifierError> {
        self.train(x, y)
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<u8>, ClassifierError> {
        self.infer(x)
    }

    fn name(&self) -> &str {
        "perceptron"
    }
}
