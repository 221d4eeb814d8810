//! Pearson correlation of each feature column with the target.
//!
//! The preparation pipeline keeps only the columns whose absolute
//! correlation with the diagnosis label clears a threshold, the same
//! univariate screen the exploratory analysis applies before training.

use crate::math::Array2;

/// Compute Pearson's r between every column of `x` and the target `y`.
///
/// Columns (or a target) with zero variance produce a coefficient of 0.0
/// rather than NaN, so downstream threshold comparisons stay well-defined.
pub fn pearson_r(x: &Array2<f32>, y: &[u8]) -> Vec<f32> {
    let (n_samples, n_features) = x.shape();
    assert_eq!(
        y.len(),
        n_samples,
        "target length must match the number of rows"
    );
    assert!(n_samples > 0, "pearson_r requires at least one sample");

    let n = n_samples as f32;
    let y_f: Vec<f32> = y.iter().map(|&v| f32::from(v)).collect();
    let y_mean = y_f.iter().sum::<f32>() / n;
    let y_var: f32 = y_f.iter().map(|v| (v - y_mean) * (v - y_mean)).sum();

    let mut coefficients = Vec::with_capacity(n_features);
    for col in 0..n_features {
        let mut x_mean = 0.0f32;
        for row in 0..n_samples {
            x_mean += x[(row, col)];
        }
        x_mean /= n;

        let mut covariance = 0.0f32;
        let mut x_var = 0.0f32;
        for row in 0..n_samples {
            let dx = x[(row, col)] - x_mean;
            covariance += dx * (y_f[row] - y_mean);
            x_var += dx * dx;
        }

        let denom = (x_var * y_var).sqrt();
        let r = if denom > 0.0 { covariance / denom } else { 0.0 };
        coefficients.push(if r.is_finite() { r } else { 0.0 });
    }
    coefficients
}

/// Indices of the coefficients whose absolute value exceeds `threshold`,
/// in column order.
pub fn select_by_threshold(coefficients: &[f32], threshold: f32) -> Vec<usize> {
    coefficients
        .iter()
        .enumerate()
        .filter_map(|(i, &r)| if r.abs() > threshold { Some(i) } else { None })
        .collect()
}
