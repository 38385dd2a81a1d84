//! Metric normalization onto a common z-score scale.

use peerscore_math::{clamp_z, robust_z, standard_z};
use peerscore_primitives::{MetricDefinition, ScoreBreakdown};

use crate::MetricStatistics;

/// Normalize one fund's raw metric value against its group statistics.
///
/// Non-degenerate statistics use the standard z-score. Degenerate
/// statistics (group too small, or dispersion effectively zero) fall
/// back to the robust median/MAD z-score; when the MAD is also zero the
/// score is 0 for every fund, since the metric carries no ranking
/// signal. Either path is then winsorized to the clip bound and
/// direction-corrected so a higher z-score always means better.
///
/// Returns `None` when the metric has zero usable observations in the
/// group; such a metric appears in no breakdown at all.
#[must_use]
pub fn normalize_metric(
    definition: &MetricDefinition,
    raw_value: f64,
    stats: &MetricStatistics,
    clip_bound: f64,
) -> Option<ScoreBreakdown> {
    if stats.n == 0 {
        return None;
    }

    let (z, used_robust_fallback) = if stats.degenerate {
        (robust_z(raw_value, stats.median, stats.mad), true)
    } else {
        (standard_z(raw_value, stats.mean, stats.std_dev), false)
    };

    let (z, winsorized) = clamp_z(z, clip_bound);
    let z = z * definition.direction.sign();

    Some(ScoreBreakdown {
        metric_id: definition.id.clone(),
        raw_value,
        z_score: z,
        winsorized,
        used_robust_fallback,
    })
}
