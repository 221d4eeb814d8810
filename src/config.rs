use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Hyperparameters for the perceptron learner.
///
/// Both values are fixed at construction; training never mutates them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PerceptronConfig {
    /// Step size applied to every weight/bias correction. Must be positive.
    pub learning_rate: f32,
    /// Number of full passes over the training samples. Must be positive.
    /// Every epoch always runs; there is no early-stopping check.
    pub epochs: usize,
}

impl PerceptronConfig {
    pub fn new(learning_rate: f32, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
        }
    }

    /// Reject non-positive hyperparameters.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ClassifierError::InvalidConfiguration(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(ClassifierError::InvalidConfiguration(
                "epochs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 1000,
        }
    }
}
