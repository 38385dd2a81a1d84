//! Score output type definitions.

use serde::{Deserialize, Serialize};

use crate::{Date, FundId, MetricId, PeerGroupId};

/// Per-metric detail behind a fund's composite score.
///
/// One entry exists per (fund, metric) with a usable observation.
/// `z_score` is the winsorized, direction-corrected value that entered
/// the composite, so a higher z always means better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Metric identifier.
    pub metric_id: MetricId,
    /// Raw observed value before normalization.
    pub raw_value: f64,
    /// Winsorized, direction-corrected z-score.
    pub z_score: f64,
    /// True when winsorization changed the z-score.
    pub winsorized: bool,
    /// True when the robust (median/MAD) path produced the z-score.
    pub used_robust_fallback: bool,
}

/// A fund's complete score for one as-of date.
///
/// Immutable once produced; regenerated on every scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Fund identifier.
    pub fund_id: FundId,
    /// Peer group the fund was scored within.
    pub group_id: PeerGroupId,
    /// Snapshot date.
    pub as_of: Date,
    /// Composite score in `[0, 100]`.
    pub composite_score: f64,
    /// Within-group percentile in `[0, 100]`, higher is better.
    pub percentile: f64,
    /// Per-metric breakdown, in catalog order.
    pub breakdown: Vec<ScoreBreakdown>,
}

/// Why a fund was excluded from a scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The fund is a group member but has no observation in the snapshot.
    MissingObservation,
    /// The fund has no metric that can contribute to a composite.
    NoUsableMetrics,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingObservation => write!(f, "missing observation"),
            Self::NoUsableMetrics => write!(f, "no usable metrics"),
        }
    }
}

/// A fund excluded from a run, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFund {
    /// Fund identifier.
    pub fund_id: FundId,
    /// Group the fund belonged to.
    pub group_id: PeerGroupId,
    /// Why it was excluded.
    pub reason: SkipReason,
}

/// Output of a bulk scoring run: results plus the skip ledger.
///
/// A localized data problem never aborts the run; affected funds appear
/// in `skipped` and degenerate (group, metric) statistics are counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRun {
    /// Snapshot date the run was computed for.
    pub as_of: Date,
    /// Score results across all scored groups, in group-id order.
    pub results: Vec<ScoreResult>,
    /// Funds excluded from the run.
    pub skipped: Vec<SkippedFund>,
    /// Count of (group, metric) statistics that fell back to the robust
    /// path or were skipped outright.
    pub degenerate_metrics: usize,
}

impl ScoreRun {
    /// Number of scored funds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the run scored no funds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results restricted to one peer group.
    pub fn results_for_group<'a>(
        &'a self,
        group_id: &'a PeerGroupId,
    ) -> impl Iterator<Item = &'a ScoreResult> {
        self.results.iter().filter(move |r| &r.group_id == group_id)
    }

    /// Result for a specific fund, if it was scored.
    #[must_use]
    pub fn result_for(&self, fund_id: &FundId) -> Option<&ScoreResult> {
        self.results.iter().find(|r| &r.fund_id == fund_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(fund: &str, group: &str, score: f64) -> ScoreResult {
        ScoreResult {
            fund_id: fund.into(),
            group_id: group.into(),
            as_of: Date::from_ymd_opt(2024, 3, 31).unwrap(),
            composite_score: score,
            percentile: 0.0,
            breakdown: Vec::new(),
        }
    }

    #[test]
    fn run_accessors() {
        let run = ScoreRun {
            as_of: Date::from_ymd_opt(2024, 3, 31).unwrap(),
            results: vec![result("A", "equity", 60.0), result("B", "bond", 40.0)],
            skipped: Vec::new(),
            degenerate_metrics: 0,
        };

        assert_eq!(run.len(), 2);
        assert!(!run.is_empty());
        assert_eq!(run.results_for_group(&"equity".into()).count(), 1);
        assert_eq!(run.result_for(&"B".into()).unwrap().composite_score, 40.0);
        assert!(run.result_for(&"C".into()).is_none());
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::MissingObservation.to_string(), "missing observation");
        assert_eq!(SkipReason::NoUsableMetrics.to_string(), "no usable metrics");
    }
}
