use crate::error::ClassifierError;
use crate::math::{Array1, Array2};

/// A small trait abstraction for binary classifiers. There is currently a
/// single implementation (the perceptron), but the contract lives here so
/// pipeline code can stay generic over the model.
pub trait BinaryClassifier {
    /// Fit the model. `y` holds one label per row of `x`, 0 or 1.
    fn fit(&mut self, x: &Array2<f32>, y: &[u8]) -> Result<(), ClassifierError>;

    /// Predict a 0/1 label for every row of `x`, in row order.
    fn predict(&self, x: &Array2<f32>) -> Result<Array1<u8>, ClassifierError>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
