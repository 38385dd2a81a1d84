//! Standard and robust z-score kernels.

use crate::DISPERSION_EPSILON;

/// Rescales an unscaled MAD to be comparable to a normal-distribution
/// standard deviation.
pub const MAD_SCALE: f64 = 0.6745;

/// Standard z-score of a value against a mean and standard deviation.
///
/// Returns 0.0 when the standard deviation is approximately zero,
/// guarding against division by zero: a distribution with no dispersion
/// carries no ranking signal.
#[must_use]
pub fn standard_z(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev < DISPERSION_EPSILON {
        return 0.0;
    }
    (value - mean) / std_dev
}

/// Robust z-score of a value against a median and MAD.
///
/// Returns 0.0 when the MAD is approximately zero (all values
/// identical): no ranking signal is derived from a metric with zero
/// information content.
#[must_use]
pub fn robust_z(value: f64, median: f64, mad: f64) -> f64 {
    if mad < DISPERSION_EPSILON {
        return 0.0;
    }
    MAD_SCALE * (value - median) / mad
}
