//! perceptron-classifiers: a from-scratch online perceptron for binary
//! classification.
//!
//! The crate centers on a hand-written perceptron learner (weight vector,
//! bias, step activation, fixed-epoch online updates) plus the small data
//! pipeline around it: delimited-file ingestion, dataset splitting and
//! outlier filtering, per-column standardization, correlation-based feature
//! selection, and classification metrics.
//!
//! The design favors small, testable modules; the learner itself is pure
//! CPU-bound computation with no I/O of its own.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod feature_selection;
pub mod io;
pub mod math;
pub mod models;
pub mod preprocessing;
pub mod stats;
