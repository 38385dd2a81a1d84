//! Distribution summary statistics.

use ndarray::Array1;

/// Threshold below which a dispersion measure (standard deviation or
/// MAD) is treated as zero.
pub const DISPERSION_EPSILON: f64 = 1e-9;

/// Summary statistics of one metric's values within a peer group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSummary {
    /// Count of usable (finite, non-null) values.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator; 0.0 for n ≤ 1).
    pub std_dev: f64,
    /// Median.
    pub median: f64,
    /// Median absolute deviation from the median, unscaled.
    pub mad: f64,
}

impl DistributionSummary {
    /// Summarize a vector of values.
    ///
    /// Non-finite values are filtered out before any statistic is
    /// computed. An empty (or all-non-finite) input produces an all-zero
    /// summary with `n = 0`; this is not an error, the caller decides
    /// what an empty distribution means.
    #[must_use]
    pub fn from_values(values: &Array1<f64>) -> Self {
        let mut usable: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let n = usable.len();
        if n == 0 {
            return Self { n: 0, mean: 0.0, std_dev: 0.0, median: 0.0, mad: 0.0 };
        }

        let mean = usable.iter().sum::<f64>() / n as f64;
        let std_dev = if n > 1 {
            let variance =
                usable.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
            variance.sqrt()
        } else {
            0.0
        };

        usable.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = median_of_sorted(&usable);

        let mut deviations: Vec<f64> = usable.iter().map(|v| (v - median).abs()).collect();
        deviations.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mad = median_of_sorted(&deviations);

        Self { n, mean, std_dev, median, mad }
    }

    /// Whether the dispersion is effectively zero.
    #[must_use]
    pub fn zero_dispersion(&self) -> bool {
        self.std_dev <= DISPERSION_EPSILON
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 { sorted[mid] } else { (sorted[mid - 1] + sorted[mid]) / 2.0 }
}
