//! Classification metrics and small statistical helpers.
//!
//! The evaluation side of the pipeline: confusion counts and the accuracy /
//! precision / recall / F1 scores derived from them, plus the quantile
//! helper shared with the outlier filter.

use crate::error::ClassifierError;

/// Confusion counts for a binary classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Tally predictions against ground truth. Labels are 0/1; any nonzero
    /// value counts as the positive class. Misaligned slice lengths are a
    /// contract error, not a truncation.
    pub fn from_labels(truth: &[u8], predicted: &[u8]) -> Result<Self, ClassifierError> {
        if truth.len() != predicted.len() {
            return Err(ClassifierError::DimensionMismatch(format!(
                "truth vector has {} entries but prediction vector has {}",
                truth.len(),
                predicted.len()
            )));
        }
        let mut cm = ConfusionMatrix {
            true_positives: 0,
            false_positives: 0,
            true_negatives: 0,
            false_negatives: 0,
        };
        for (&t, &p) in truth.iter().zip(predicted.iter()) {
            match (t != 0, p != 0) {
                (true, true) => cm.true_positives += 1,
                (false, true) => cm.false_positives += 1,
                (false, false) => cm.true_negatives += 1,
                (true, false) => cm.false_negatives += 1,
            }
        }
        Ok(cm)
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// Fraction of predictions that match the truth.
    pub fn accuracy(&self) -> f32 {
        ratio(
            self.true_positives + self.true_negatives,
            self.total(),
        )
    }

    /// TP / (TP + FP). Zero when nothing was predicted positive.
    pub fn precision(&self) -> f32 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// TP / (TP + FN). Zero when the truth holds no positives.
    pub fn recall(&self) -> f32 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> f32 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

/// Fraction of positions where the two label slices agree.
pub fn accuracy(truth: &[u8], predicted: &[u8]) -> Result<f32, ClassifierError> {
    Ok(ConfusionMatrix::from_labels(truth, predicted)?.accuracy())
}

/// Linearly interpolated quantile of `values`, `q` in `[0, 1]`.
///
/// Matches the default numpy/pandas interpolation: the quantile sits at
/// fractional rank `q * (n - 1)` of the sorted values.
pub fn quantile(values: &[f32], q: f32) -> f32 {
    assert!(!values.is_empty(), "quantile of an empty slice");
    assert!((0.0..=1.0).contains(&q), "quantile fraction out of range");

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q * (sorted.len() - 1) as f32;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f32;
        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }
}
