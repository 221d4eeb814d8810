pub mod classifier_trait;
pub mod perceptron;

pub use classifier_trait::BinaryClassifier;
pub use perceptron::Perceptron;
