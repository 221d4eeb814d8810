//! Feature transforms: log compression and per-column standardization.
//!
//! The scaler mirrors the usual fit-on-train / transform-everything
//! workflow: it learns per-column mean and standard deviation from the
//! training rows, then applies the same shift and scale to any matrix of
//! matching width. The log transform precedes it for right-skewed
//! positive-valued columns.

use crate::math::Array2;

/// Apply `ln(1 + v)` to every element.
///
/// The usual compression for right-skewed positive features, applied to
/// the selected columns before outlier filtering and standardization.
/// Values at or below -1 produce NaN/-inf, as with any log; callers feed
/// this non-negative measurement data.
pub fn log1p_transform(x: &Array2<f32>) -> Array2<f32> {
    x.mapv(|v| v.ln_1p())
}

/// Simple standard scaler (per-column mean/std).
#[derive(Clone, Debug)]
pub struct StandardScaler {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl StandardScaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f32 = 1e-6;

    /// Learn column statistics from `x` (rows are samples).
    pub fn fit(x: &Array2<f32>) -> StandardScaler {
        let (nrows, ncols) = x.shape();
        assert!(nrows > 0 && ncols > 0, "fit requires a non-empty matrix");

        let mut mean = vec![0.0f32; ncols];
        for r in 0..nrows {
            for c in 0..ncols {
                mean[c] += x[(r, c)];
            }
        }
        let nrows_f = nrows as f32;
        for v in mean.iter_mut() {
            *v /= nrows_f;
        }

        let mut std = vec![0.0f32; ncols];
        for r in 0..nrows {
            for c in 0..ncols {
                let d = x[(r, c)] - mean[c];
                std[c] += d * d;
            }
        }
        for v in std.iter_mut() {
            *v = (*v / nrows_f).sqrt().max(Self::MIN_STD);
        }

        StandardScaler { mean, std }
    }

    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Shift and scale every column of `x` by the fitted statistics.
    pub fn transform(&self, x: &Array2<f32>) -> Array2<f32> {
        let (nrows, ncols) = x.shape();
        assert_eq!(
            ncols,
            self.mean.len(),
            "matrix width does not match the fitted scaler"
        );

        let mut out = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                out.push((x[(r, c)] - self.mean[c]) / self.std[c]);
            }
        }
        Array2::from_shape_vec((nrows, ncols), out).expect("transform: shape mismatch")
    }

    /// Fit on `x` and transform it in one call.
    pub fn fit_transform(x: &Array2<f32>) -> Array2<f32> {
        StandardScaler::fit(x).transform(x)
    }
}
