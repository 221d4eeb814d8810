//! Delimited tabular file ingestion.
pub mod tabular;

pub use tabular::{read_delimited, TabularReaderConfig};
