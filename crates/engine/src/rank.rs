//! Within-group percentile assignment.

use peerscore_math::rank_percentiles;
use peerscore_primitives::ScoreResult;

/// Assign within-group percentiles to a group's score results.
///
/// Percentiles are relative to the fund's own peer group for the as-of
/// date; cross-group comparison is undefined and never exposed. Equal
/// composite scores share the same percentile (fractional ranking).
pub fn assign_percentiles(results: &mut [ScoreResult]) {
    let scores: Vec<f64> = results.iter().map(|r| r.composite_score).collect();
    let percentiles = rank_percentiles(&scores);
    for (result, percentile) in results.iter_mut().zip(percentiles) {
        result.percentile = percentile;
    }
}
