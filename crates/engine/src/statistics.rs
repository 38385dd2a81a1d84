//! Per-group metric statistics.

use std::collections::BTreeMap;

use ndarray::Array1;
use peerscore_math::DistributionSummary;
use peerscore_primitives::{FundObservation, MetricCatalog, MetricId, PeerGroupId};

/// Distribution of one metric within one peer group for one as-of date.
///
/// `degenerate` marks a distribution the standard z-score cannot be
/// trusted on: fewer usable observations than the configured minimum
/// group size, or an effectively zero standard deviation. Degenerate
/// statistics route normalization through the robust (median/MAD) path.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricStatistics {
    /// Metric identifier.
    pub metric_id: MetricId,
    /// Count of usable observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Median.
    pub median: f64,
    /// Median absolute deviation, unscaled.
    pub mad: f64,
    /// Whether the standard path must not be used.
    pub degenerate: bool,
}

/// All metric statistics for one peer group.
///
/// Computed fresh per (group, as-of date) invocation and never cached
/// across dates, so the statistics always reflect the exact observation
/// set of the requested snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatistics {
    group_id: PeerGroupId,
    by_metric: BTreeMap<MetricId, MetricStatistics>,
}

impl GroupStatistics {
    /// Compute statistics for every catalog metric over a group's
    /// observations.
    ///
    /// Null and non-finite metric values are excluded per metric. A
    /// metric with zero usable observations is never an error; its
    /// statistics are degenerate with `n = 0` and the metric is skipped
    /// for every fund in the group.
    #[must_use]
    pub fn compute(
        group_id: PeerGroupId,
        catalog: &MetricCatalog,
        observations: &[&FundObservation],
        min_group_size: usize,
    ) -> Self {
        let mut by_metric = BTreeMap::new();
        for def in catalog.metrics() {
            let values: Array1<f64> =
                observations.iter().filter_map(|obs| obs.metric(&def.id)).collect();
            let summary = DistributionSummary::from_values(&values);
            let degenerate = summary.n < min_group_size || summary.zero_dispersion();
            by_metric.insert(
                def.id.clone(),
                MetricStatistics {
                    metric_id: def.id.clone(),
                    n: summary.n,
                    mean: summary.mean,
                    std_dev: summary.std_dev,
                    median: summary.median,
                    mad: summary.mad,
                    degenerate,
                },
            );
        }
        Self { group_id, by_metric }
    }

    /// Group identifier.
    #[must_use]
    pub const fn group_id(&self) -> &PeerGroupId {
        &self.group_id
    }

    /// Statistics for one metric.
    #[must_use]
    pub fn metric(&self, id: &MetricId) -> Option<&MetricStatistics> {
        self.by_metric.get(id)
    }

    /// Number of degenerate metric distributions in the group.
    #[must_use]
    pub fn degenerate_count(&self) -> usize {
        self.by_metric.values().filter(|s| s.degenerate).count()
    }

    /// Number of metrics with statistics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_metric.len()
    }

    /// Check if no metrics have statistics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_metric.is_empty()
    }
}
