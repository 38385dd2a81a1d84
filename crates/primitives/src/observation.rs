//! Fund observation type definitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Date, FundId, MetricId, PeerGroupId};

/// One fund's raw metric values for one as-of date.
///
/// A `None` value means the metric is unavailable for this fund on this
/// date. Unavailable metrics are excluded from peer statistics and from
/// the fund's composite; they are never treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundObservation {
    /// Fund identifier.
    pub fund_id: FundId,
    /// Peer group the fund belongs to on this date.
    pub group_id: PeerGroupId,
    /// Snapshot date.
    pub as_of: Date,
    metrics: HashMap<MetricId, Option<f64>>,
}

impl FundObservation {
    /// Create an observation with no metric values.
    #[must_use]
    pub fn new(
        fund_id: impl Into<FundId>,
        group_id: impl Into<PeerGroupId>,
        as_of: Date,
    ) -> Self {
        Self {
            fund_id: fund_id.into(),
            group_id: group_id.into(),
            as_of,
            metrics: HashMap::new(),
        }
    }

    /// Builder-style metric insertion.
    #[must_use]
    pub fn with_metric(mut self, id: impl Into<MetricId>, value: impl Into<Option<f64>>) -> Self {
        self.metrics.insert(id.into(), value.into());
        self
    }

    /// Insert or replace a metric value.
    pub fn set_metric(&mut self, id: impl Into<MetricId>, value: Option<f64>) {
        self.metrics.insert(id.into(), value);
    }

    /// Usable value for a metric.
    ///
    /// Returns `None` for an absent metric, an explicit null, or a stored
    /// NaN/infinite value. Non-finite inputs are treated as unavailable so
    /// they can never propagate into a score.
    #[must_use]
    pub fn metric(&self, id: &MetricId) -> Option<f64> {
        self.metrics.get(id).copied().flatten().filter(|v| v.is_finite())
    }

    /// Ids of all recorded metrics, including nulls.
    pub fn metric_ids(&self) -> impl Iterator<Item = &MetricId> {
        self.metrics.keys()
    }

    /// Number of recorded metrics, including nulls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Check if no metrics are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> Date {
        Date::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn metric_lookup() {
        let obs = FundObservation::new("F1", "equity", date())
            .with_metric("ret_1y", 0.12)
            .with_metric("expense", None);

        assert_eq!(obs.metric(&MetricId::from("ret_1y")), Some(0.12));
        assert_eq!(obs.metric(&MetricId::from("expense")), None);
        assert_eq!(obs.metric(&MetricId::from("absent")), None);
        assert_eq!(obs.len(), 2);
    }

    #[test]
    fn non_finite_values_read_as_null() {
        let obs = FundObservation::new("F1", "equity", date())
            .with_metric("ret_1y", f64::NAN)
            .with_metric("sharpe", f64::INFINITY);

        assert_eq!(obs.metric(&MetricId::from("ret_1y")), None);
        assert_eq!(obs.metric(&MetricId::from("sharpe")), None);
    }

    #[test]
    fn set_metric_replaces() {
        let mut obs = FundObservation::new("F1", "equity", date()).with_metric("ret_1y", 0.1);
        obs.set_metric("ret_1y", Some(0.2));
        assert_eq!(obs.metric(&MetricId::from("ret_1y")), Some(0.2));
    }
}
