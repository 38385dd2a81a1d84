//! Composite score combination.

use peerscore_primitives::{MetricCatalog, ScoreBreakdown};

/// Combine a fund's normalized breakdowns into one composite in
/// `[0, 100]`.
///
/// The weighted average runs over the metrics the fund actually has;
/// missing metrics are excluded from both numerator and denominator, so
/// a fund missing one metric is scored purely on the others and never
/// penalized with an implicit zero. The weighted z maps onto the output
/// range via `clamp(50 + z * scale, 0, 100)`, saturating for extreme
/// values.
///
/// Returns `None` when no breakdown carries positive weight; such a
/// fund cannot be scored.
#[must_use]
pub fn composite_score(
    breakdowns: &[ScoreBreakdown],
    catalog: &MetricCatalog,
    scale: f64,
) -> Option<f64> {
    let mut total_weight = 0.0;
    let mut weighted_z = 0.0;
    for breakdown in breakdowns {
        let Some(def) = catalog.get(&breakdown.metric_id) else {
            continue;
        };
        if def.weight <= 0.0 {
            continue;
        }
        total_weight += def.weight;
        weighted_z += def.weight * breakdown.z_score;
    }

    if total_weight <= 0.0 {
        return None;
    }

    Some((50.0 + (weighted_z / total_weight) * scale).clamp(0.0, 100.0))
}
