//! Feature selection by correlation against the binary target.
pub mod correlation;

pub use correlation::{pearson_r, select_by_threshold};
