//! Small ndarray-like types used throughout the crate.
//!
//! Provides `Array2` (2D, flat row-major) and `Array1` (1D) lightweight
//! containers with minimal convenience methods. The row-major layout of
//! `Array2` guarantees a uniform row width by construction, which the
//! classifier's dimension checks rely on.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
