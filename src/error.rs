use std::error::Error;
use std::fmt;

/// Contract errors surfaced by the classifier and dataset layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Non-positive learning rate or epoch count at construction.
    InvalidConfiguration(String),
    /// Feature/label count mismatch, or feature-width mismatch between
    /// training and inference inputs.
    DimensionMismatch(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
            ClassifierError::DimensionMismatch(msg) => {
                write!(f, "dimension mismatch: {}", msg)
            }
        }
    }
}

impl Error for ClassifierError {}
