//! Winsorization of z-scores for outlier handling.

use crate::MathError;

/// Clamp a z-score to a symmetric bound.
///
/// Returns the clamped value and whether clamping changed it. Clipping
/// preserves ordinal information while bounding the magnitude a single
/// extreme fund can contribute to a composite.
#[must_use]
pub fn clamp_z(z: f64, bound: f64) -> (f64, bool) {
    let clamped = z.clamp(-bound, bound);
    (clamped, clamped != z)
}

/// Winsorization configuration and transform.
#[derive(Debug, Clone, Copy)]
pub struct ZClip {
    bound: f64,
}

impl ZClip {
    /// Create a new z-score clip.
    ///
    /// # Errors
    /// Returns `MathError::InvalidClipBound` unless the bound is finite
    /// and strictly positive.
    pub fn new(bound: f64) -> Result<Self, MathError> {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(MathError::InvalidClipBound(bound));
        }
        Ok(Self { bound })
    }

    /// Get the clip bound.
    #[must_use]
    pub const fn bound(&self) -> f64 {
        self.bound
    }

    /// Apply winsorization to a z-score.
    #[must_use]
    pub fn apply(&self, z: f64) -> (f64, bool) {
        clamp_z(z, self.bound)
    }
}
