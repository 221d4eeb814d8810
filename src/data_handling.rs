//! Data structures and helpers for holding and partitioning labeled
//! feature data.
//!
//! This module defines `Dataset`, the immutable pairing of a feature matrix
//! and a binary label vector handed to the classifier, plus the row-level
//! operations the preparation pipeline needs: reproducible train/eval
//! splitting, interquartile-range outlier removal, and column selection.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::ClassifierError;
use crate::math::{Array1, Array2};
use crate::stats::quantile;

/// A labeled feature matrix: `x` holds one row per sample, `y` one binary
/// label (0 or 1) per row, aligned by index.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f32>,
    pub y: Array1<u8>,
    /// Column names, aligned to the columns of `x`.
    pub feature_names: Vec<String>,
}

impl Dataset {
    /// Pair a feature matrix with its label vector, rejecting misaligned
    /// shapes up front rather than truncating silently.
    pub fn new(
        x: Array2<f32>,
        y: Array1<u8>,
        feature_names: Vec<String>,
    ) -> Result<Self, ClassifierError> {
        if y.len() != x.nrows() {
            return Err(ClassifierError::DimensionMismatch(format!(
                "feature matrix has {} rows but label vector has {} entries",
                x.nrows(),
                y.len()
            )));
        }
        if feature_names.len() != x.ncols() {
            return Err(ClassifierError::DimensionMismatch(format!(
                "feature matrix has {} columns but {} names were given",
                x.ncols(),
                feature_names.len()
            )));
        }
        Ok(Dataset {
            x,
            y,
            feature_names,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn log_summary(&self) {
        let positives = self.y.iter().filter(|&&v| v == 1).count();
        log::info!(
            "dataset: {} samples ({} positive, {} negative), {} feature columns",
            self.n_samples(),
            positives,
            self.n_samples() - positives,
            self.n_features()
        );
    }

    /// Keep only the given feature columns, in the given order.
    pub fn select_features(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select_columns(indices),
            y: self.y.clone(),
            feature_names: indices
                .iter()
                .map(|&i| self.feature_names[i].clone())
                .collect(),
        }
    }

    /// Keep only the rows where `mask[i]` is true.
    pub fn filter(&self, mask: &[bool]) -> Dataset {
        let kept: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| if keep { Some(i) } else { None })
            .collect();
        Dataset {
            x: self.x.select_rows(&kept),
            y: self.y.select(&kept),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Drop rows holding an outlier in any feature column, using Tukey's
    /// fences: values outside `[Q1 - factor*IQR, Q3 + factor*IQR]` are
    /// outliers. The conventional `factor` is 1.5.
    pub fn remove_outliers_iqr(&self, factor: f32) -> Dataset {
        let n = self.n_samples();
        let mut keep = vec![true; n];

        for col in 0..self.n_features() {
            let values = self.x.column(col).to_vec();
            let q1 = quantile(&values, 0.25);
            let q3 = quantile(&values, 0.75);
            let iqr = q3 - q1;
            let lower = q1 - factor * iqr;
            let upper = q3 + factor * iqr;
            for (i, flag) in keep.iter_mut().enumerate() {
                let v = self.x[(i, col)];
                if v < lower || v > upper {
                    *flag = false;
                }
            }
        }

        let filtered = self.filter(&keep);
        let dropped = n - filtered.n_samples();
        if dropped > 0 {
            log::info!("removed {} outlier rows of {} (IQR factor {})", dropped, n, factor);
        }
        filtered
    }

    /// Split into training and evaluation partitions.
    ///
    /// Rows are shuffled with a seeded generator so the same seed always
    /// yields the same partitioning; the first `train_fraction` of the
    /// shuffled order becomes the training set.
    pub fn split(&self, train_fraction: f32, seed: u64) -> (Dataset, Dataset) {
        assert!(
            train_fraction > 0.0 && train_fraction < 1.0,
            "train_fraction must lie strictly between 0 and 1"
        );
        let n = self.n_samples();
        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        // f64 keeps the row count exact well past f32's integer range.
        let n_train = (n as f64 * f64::from(train_fraction)) as usize;
        let (train_idx, eval_idx) = indices.split_at(n_train);

        let train = Dataset {
            x: self.x.select_rows(train_idx),
            y: self.y.select(train_idx),
            feature_names: self.feature_names.clone(),
        };
        let eval = Dataset {
            x: self.x.select_rows(eval_idx),
            y: self.y.select(eval_idx),
            feature_names: self.feature_names.clone(),
        };
        (train, eval)
    }
}
