//! Scoring orchestration.

use std::collections::BTreeMap;

use peerscore_math::ZClip;
use peerscore_primitives::{
    Date, FundId, FundObservation, MetricCatalog, PeerGroup, PeerGroupId, ScoreBreakdown,
    ScoreResult, ScoreRun, SkipReason, SkippedFund,
};
use peerscore_traits::{FundScorer, ObservationSource, PeerGroupSource, ScoreError};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{EngineError, GroupStatistics, assign_percentiles, composite_score, normalize_metric};

/// Configuration for the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Peer groups with fewer usable observations than this use the
    /// robust normalization path.
    pub min_group_size: usize,
    /// Symmetric z-score winsorization bound.
    pub clip_bound: f64,
    /// Points of composite score per unit of weighted z.
    pub scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { min_group_size: 6, clip_bound: 3.0, scale: 15.0 }
    }
}

/// One peer group's scoring output before merging into a run.
#[derive(Debug)]
struct GroupOutcome {
    results: Vec<ScoreResult>,
    skipped: Vec<SkippedFund>,
    degenerate_metrics: usize,
}

/// The scoring engine: resolves peer groups, computes group statistics,
/// normalizes, combines, and ranks.
///
/// Implements [`FundScorer`], the one contract both bulk and preview
/// callers depend on. Given the same observation set and as-of date,
/// re-running produces identical results: there is no randomness, no
/// wall-clock dependency, and group/member iteration is sorted.
#[derive(Debug)]
pub struct ScoringEngine<P, O> {
    peer_groups: P,
    observations: O,
    catalog: MetricCatalog,
    config: EngineConfig,
}

impl<P: PeerGroupSource, O: ObservationSource> ScoringEngine<P, O> {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new(peer_groups: P, observations: O, catalog: MetricCatalog) -> Self {
        Self { peer_groups, observations, catalog, config: EngineConfig::default() }
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` (or a math error for the
    /// clip bound) when the configuration is unusable.
    pub fn with_config(
        peer_groups: P,
        observations: O,
        catalog: MetricCatalog,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        if config.min_group_size == 0 {
            return Err(EngineError::InvalidConfig(
                "min_group_size must be at least 1".to_string(),
            ));
        }
        ZClip::new(config.clip_bound)?;
        if !config.scale.is_finite() || config.scale <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "scale must be finite and positive, got {}",
                config.scale
            )));
        }
        Ok(Self { peer_groups, observations, catalog, config })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the metric catalog.
    #[must_use]
    pub const fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    fn resolve_groups(
        &self,
        as_of: Date,
        group_filter: Option<&[PeerGroupId]>,
    ) -> Result<Vec<PeerGroup>, ScoreError> {
        let mut groups = self.peer_groups.peer_groups(as_of)?;
        if let Some(wanted) = group_filter {
            groups.retain(|g| wanted.contains(g.id()));
        }
        groups.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(groups)
    }

    /// Score every member of one peer group.
    ///
    /// Statistics are computed once for the group and shared by every
    /// member. Localized data problems (a member without an observation,
    /// a fund with nothing scorable, a degenerate metric) are recorded
    /// and scoring continues.
    fn score_group(&self, as_of: Date, group: &PeerGroup) -> Result<GroupOutcome, ScoreError> {
        let observations = self.observations.observations(as_of, Some(group.id()))?;

        // Membership is authoritative: observations for non-members are
        // dropped before they can influence group statistics.
        let by_fund: BTreeMap<&FundId, &FundObservation> = observations
            .iter()
            .filter(|obs| &obs.group_id == group.id() && group.contains(&obs.fund_id))
            .map(|obs| (&obs.fund_id, obs))
            .collect();

        let member_obs: Vec<&FundObservation> = by_fund.values().copied().collect();
        let stats = GroupStatistics::compute(
            group.id().clone(),
            &self.catalog,
            &member_obs,
            self.config.min_group_size,
        );

        let mut results = Vec::with_capacity(group.len());
        let mut skipped = Vec::new();

        for fund_id in group.members() {
            let Some(obs) = by_fund.get(fund_id) else {
                warn!(fund = %fund_id, group = %group.id(), "member fund has no observation, skipping");
                skipped.push(SkippedFund {
                    fund_id: fund_id.clone(),
                    group_id: group.id().clone(),
                    reason: SkipReason::MissingObservation,
                });
                continue;
            };

            let breakdown: Vec<ScoreBreakdown> = self
                .catalog
                .metrics()
                .iter()
                .filter_map(|def| {
                    let raw = obs.metric(&def.id)?;
                    let metric_stats = stats.metric(&def.id)?;
                    normalize_metric(def, raw, metric_stats, self.config.clip_bound)
                })
                .collect();

            let Some(composite) = composite_score(&breakdown, &self.catalog, self.config.scale)
            else {
                warn!(fund = %fund_id, group = %group.id(), "fund has no usable metrics, skipping");
                skipped.push(SkippedFund {
                    fund_id: fund_id.clone(),
                    group_id: group.id().clone(),
                    reason: SkipReason::NoUsableMetrics,
                });
                continue;
            };

            results.push(ScoreResult {
                fund_id: fund_id.clone(),
                group_id: group.id().clone(),
                as_of,
                composite_score: composite,
                percentile: 0.0,
                breakdown,
            });
        }

        assign_percentiles(&mut results);

        Ok(GroupOutcome { results, skipped, degenerate_metrics: stats.degenerate_count() })
    }
}

impl<P: PeerGroupSource, O: ObservationSource> FundScorer for ScoringEngine<P, O> {
    fn score_as_of(
        &self,
        as_of: Date,
        group_filter: Option<&[PeerGroupId]>,
    ) -> Result<ScoreRun, ScoreError> {
        let groups = self.resolve_groups(as_of, group_filter)?;

        // Independent groups share no state; score them in parallel and
        // merge in group-id order so output ordering is stable.
        let outcomes = groups
            .par_iter()
            .map(|group| self.score_group(as_of, group))
            .collect::<Result<Vec<GroupOutcome>, ScoreError>>()?;

        let mut run =
            ScoreRun { as_of, results: Vec::new(), skipped: Vec::new(), degenerate_metrics: 0 };
        for outcome in outcomes {
            run.results.extend(outcome.results);
            run.skipped.extend(outcome.skipped);
            run.degenerate_metrics += outcome.degenerate_metrics;
        }

        debug!(
            scored = run.len(),
            skipped = run.skipped.len(),
            degenerate = run.degenerate_metrics,
            "scoring run complete"
        );
        Ok(run)
    }

    fn score_single_fund(&self, as_of: Date, fund_id: &FundId) -> Result<ScoreResult, ScoreError> {
        let groups = self.peer_groups.peer_groups(as_of)?;
        let group = groups
            .into_iter()
            .find(|g| g.contains(fund_id))
            .ok_or_else(|| ScoreError::FundNotFound(fund_id.clone()))?;

        // Scores are peer-relative: the full group is recomputed even
        // for one fund.
        let outcome = self.score_group(as_of, &group)?;
        if let Some(result) = outcome.results.into_iter().find(|r| &r.fund_id == fund_id) {
            return Ok(result);
        }

        match outcome.skipped.iter().find(|s| &s.fund_id == fund_id).map(|s| s.reason) {
            Some(SkipReason::NoUsableMetrics) => Err(ScoreError::NoUsableMetrics(fund_id.clone())),
            _ => Err(ScoreError::FundNotFound(fund_id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use peerscore_primitives::{Direction, MetricDefinition, MetricId};

    use super::*;
    use crate::StaticUniverse;

    const RET: &str = "ret_1y";
    const EXPENSE: &str = "expense";

    fn date() -> Date {
        Date::from_ymd_opt(2024, 3, 31).unwrap()
    }

    fn catalog() -> MetricCatalog {
        MetricCatalog::new(vec![
            MetricDefinition::new(RET, Direction::HigherIsBetter, 0.7),
            MetricDefinition::new(EXPENSE, Direction::LowerIsBetter, 0.3),
        ])
        .unwrap()
    }

    fn obs(fund: &str, group: &str, ret: Option<f64>, expense: Option<f64>) -> FundObservation {
        FundObservation::new(fund, group, date())
            .with_metric(RET, ret)
            .with_metric(EXPENSE, expense)
    }

    /// The fixed test universe: 8 funds across 2 peer groups (5 and 3
    /// members) with literal metric values.
    fn two_group_observations() -> Vec<FundObservation> {
        vec![
            obs("EQ1", "equity", Some(0.12), Some(0.45)),
            obs("EQ2", "equity", Some(0.07), Some(0.90)),
            obs("EQ3", "equity", Some(-0.03), Some(0.25)),
            obs("EQ4", "equity", Some(0.21), Some(1.10)),
            obs("EQ5", "equity", Some(0.05), Some(0.60)),
            obs("BD1", "bond", Some(0.04), Some(0.30)),
            obs("BD2", "bond", Some(0.01), Some(0.55)),
            obs("BD3", "bond", Some(0.06), Some(0.20)),
        ]
    }

    fn engine_for(
        observations: Vec<FundObservation>,
    ) -> ScoringEngine<StaticUniverse, StaticUniverse> {
        let universe = StaticUniverse::from_observations(observations);
        ScoringEngine::new(universe.clone(), universe, catalog())
    }

    // An independent, straight-line implementation of the same scoring
    // rules, kept deliberately different in structure (count-based
    // ranking, per-fund loops) to detect drift in the engine.
    mod reference {
        use super::*;

        const EPS: f64 = 1e-9;

        fn median(sorted: &[f64]) -> f64 {
            let n = sorted.len();
            if n % 2 == 1 {
                sorted[n / 2]
            } else {
                (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
            }
        }

        pub(super) fn group_scores(
            catalog: &MetricCatalog,
            observations: &[FundObservation],
            min_group_size: usize,
            clip_bound: f64,
            scale: f64,
        ) -> Vec<(FundId, f64, f64)> {
            struct Stats {
                n: usize,
                mean: f64,
                std_dev: f64,
                median: f64,
                mad: f64,
            }

            let mut stats: Vec<Stats> = Vec::new();
            for def in catalog.metrics() {
                let mut values: Vec<f64> =
                    observations.iter().filter_map(|o| o.metric(&def.id)).collect();
                values.sort_by(|a, b| a.partial_cmp(b).unwrap());
                let n = values.len();
                if n == 0 {
                    stats.push(Stats { n: 0, mean: 0.0, std_dev: 0.0, median: 0.0, mad: 0.0 });
                    continue;
                }
                let mean = values.iter().sum::<f64>() / n as f64;
                let std_dev = if n > 1 {
                    (values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
                        / (n as f64 - 1.0))
                        .sqrt()
                } else {
                    0.0
                };
                let med = median(&values);
                let mut devs: Vec<f64> = values.iter().map(|v| (v - med).abs()).collect();
                devs.sort_by(|a, b| a.partial_cmp(b).unwrap());
                let mad = median(&devs);
                stats.push(Stats { n, mean, std_dev, median: med, mad });
            }

            let mut scored: Vec<(FundId, f64)> = Vec::new();
            for obs in observations {
                let mut weight_sum = 0.0;
                let mut z_sum = 0.0;
                for (def, st) in catalog.metrics().iter().zip(&stats) {
                    if st.n == 0 || def.weight <= 0.0 {
                        continue;
                    }
                    let Some(value) = obs.metric(&def.id) else { continue };
                    let degenerate = st.n < min_group_size || st.std_dev <= EPS;
                    let mut z = if degenerate {
                        if st.mad < EPS { 0.0 } else { 0.6745 * (value - st.median) / st.mad }
                    } else {
                        (value - st.mean) / st.std_dev
                    };
                    if z > clip_bound {
                        z = clip_bound;
                    }
                    if z < -clip_bound {
                        z = -clip_bound;
                    }
                    if def.direction == Direction::LowerIsBetter {
                        z = -z;
                    }
                    weight_sum += def.weight;
                    z_sum += def.weight * z;
                }
                if weight_sum > 0.0 {
                    let score = (50.0 + z_sum / weight_sum * scale).clamp(0.0, 100.0);
                    scored.push((obs.fund_id.clone(), score));
                }
            }

            let n = scored.len();
            scored
                .iter()
                .map(|(fund, score)| {
                    let percentile = if n == 1 {
                        50.0
                    } else {
                        let below =
                            scored.iter().filter(|(_, other)| other < score).count() as f64;
                        let equal =
                            scored.iter().filter(|(_, other)| other == score).count() as f64;
                        100.0 * (below + (equal - 1.0) / 2.0) / (n as f64 - 1.0)
                    };
                    (fund.clone(), *score, percentile)
                })
                .collect()
        }
    }

    #[test]
    fn empty_universe_returns_empty_run() {
        let engine = engine_for(Vec::new());
        let run = engine.score_as_of(date(), None).unwrap();
        assert!(run.is_empty());
        assert!(run.skipped.is_empty());
    }

    #[test]
    fn scoring_is_deterministic() {
        let engine = engine_for(two_group_observations());
        let first = engine.score_as_of(date(), None).unwrap();
        let second = engine.score_as_of(date(), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scores_and_percentiles_are_bounded() {
        let engine = engine_for(two_group_observations());
        let run = engine.score_as_of(date(), None).unwrap();
        assert_eq!(run.len(), 8);
        for result in &run.results {
            assert!((0.0..=100.0).contains(&result.composite_score));
            assert!((0.0..=100.0).contains(&result.percentile));
        }
    }

    #[test]
    fn percentiles_are_monotonic_within_groups() {
        let engine = engine_for(two_group_observations());
        let run = engine.score_as_of(date(), None).unwrap();
        for group in ["equity", "bond"] {
            let group_id: PeerGroupId = group.into();
            let results: Vec<&ScoreResult> = run.results_for_group(&group_id).collect();
            for a in &results {
                for b in &results {
                    if a.composite_score > b.composite_score {
                        assert!(a.percentile >= b.percentile);
                    }
                    if a.composite_score == b.composite_score {
                        assert_relative_eq!(a.percentile, b.percentile, epsilon = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn matches_reference_implementation() {
        let engine = engine_for(two_group_observations());
        let run = engine.score_as_of(date(), None).unwrap();

        let all = two_group_observations();
        for group in ["equity", "bond"] {
            let group_obs: Vec<FundObservation> =
                all.iter().filter(|o| o.group_id.as_str() == group).cloned().collect();
            let expected = reference::group_scores(&catalog(), &group_obs, 6, 3.0, 15.0);
            assert!(!expected.is_empty());
            for (fund, score, percentile) in expected {
                let result = run.result_for(&fund).unwrap();
                assert_relative_eq!(result.composite_score, score, epsilon = 1e-6);
                assert_relative_eq!(result.percentile, percentile, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn small_group_uses_robust_fallback_throughout() {
        let engine = engine_for(two_group_observations());
        let run = engine.score_as_of(date(), None).unwrap();

        // The bond group has 3 members, below the default minimum of 6.
        let group_id: PeerGroupId = "bond".into();
        for result in run.results_for_group(&group_id) {
            assert!(!result.breakdown.is_empty());
            for breakdown in &result.breakdown {
                assert!(breakdown.used_robust_fallback);
            }
        }
        // 2 bond metrics degenerate; the equity group has 5 members, so
        // its 2 metrics are degenerate as well.
        assert_eq!(run.degenerate_metrics, 4);
    }

    #[test]
    fn large_group_uses_standard_path() {
        let observations: Vec<FundObservation> = (0..8)
            .map(|i| {
                obs(
                    &format!("F{i}"),
                    "equity",
                    Some(0.02 * f64::from(i)),
                    Some(0.3 + 0.05 * f64::from(i)),
                )
            })
            .collect();
        let engine = engine_for(observations);
        let run = engine.score_as_of(date(), None).unwrap();

        assert_eq!(run.len(), 8);
        assert_eq!(run.degenerate_metrics, 0);
        for result in &run.results {
            for breakdown in &result.breakdown {
                assert!(!breakdown.used_robust_fallback);
            }
        }
    }

    #[test]
    fn extreme_outlier_is_winsorized_at_bound() {
        let ret_only =
            MetricCatalog::new(vec![MetricDefinition::new(RET, Direction::HigherIsBetter, 1.0)])
                .unwrap();
        let mut observations: Vec<FundObservation> = (0..10)
            .map(|i| FundObservation::new(format!("F{i}"), "equity", date()).with_metric(RET, 0.0))
            .collect();
        observations
            .push(FundObservation::new("OUT", "equity", date()).with_metric(RET, 100.0));

        let universe = StaticUniverse::from_observations(observations);
        let engine = ScoringEngine::new(universe.clone(), universe, ret_only);
        let run = engine.score_as_of(date(), None).unwrap();

        let outlier = run.result_for(&"OUT".into()).unwrap();
        assert_eq!(outlier.breakdown.len(), 1);
        assert!(outlier.breakdown[0].winsorized);
        assert_relative_eq!(outlier.breakdown[0].z_score, 3.0, epsilon = 1e-12);
        // 50 + 3 * 15, saturation not reached
        assert_relative_eq!(outlier.composite_score, 95.0, epsilon = 1e-9);

        let peer = run.result_for(&"F0".into()).unwrap();
        assert!(!peer.breakdown[0].winsorized);
    }

    #[test]
    fn missing_metric_is_excluded_from_numerator_and_denominator() {
        let mut observations: Vec<FundObservation> = (0..6)
            .map(|i| {
                obs(
                    &format!("F{i}"),
                    "equity",
                    Some(0.02 * f64::from(i)),
                    Some(0.3 + 0.05 * f64::from(i)),
                )
            })
            .collect();
        observations.push(obs("PARTIAL", "equity", Some(0.25), None));

        let engine = engine_for(observations);
        let run = engine.score_as_of(date(), None).unwrap();

        let partial = run.result_for(&"PARTIAL".into()).unwrap();
        assert_eq!(partial.breakdown.len(), 1);
        assert_eq!(partial.breakdown[0].metric_id, MetricId::from(RET));

        // With the expense weight excluded from the denominator, the
        // composite collapses to the return z alone; a zero-imputed
        // expense would have diluted it by the 0.3 weight instead.
        let z = partial.breakdown[0].z_score;
        assert_relative_eq!(partial.composite_score, 50.0 + z * 15.0, epsilon = 1e-9);
        assert!(z > 0.0);
    }

    #[test]
    fn nan_metric_scores_identically_to_null() {
        let base: Vec<FundObservation> = (0..6)
            .map(|i| {
                obs(
                    &format!("F{i}"),
                    "equity",
                    Some(0.02 * f64::from(i)),
                    Some(0.3 + 0.05 * f64::from(i)),
                )
            })
            .collect();

        let mut with_null = base.clone();
        with_null.push(obs("X", "equity", Some(0.10), None));
        let mut with_nan = base;
        with_nan.push(obs("X", "equity", Some(0.10), Some(f64::NAN)));

        let null_run = engine_for(with_null).score_as_of(date(), None).unwrap();
        let nan_run = engine_for(with_nan).score_as_of(date(), None).unwrap();
        assert_eq!(null_run, nan_run);
    }

    #[test]
    fn identical_group_values_all_rank_at_midpoint() {
        let observations: Vec<FundObservation> = (0..7)
            .map(|i| obs(&format!("F{i}"), "equity", Some(0.05), Some(0.50)))
            .collect();
        let engine = engine_for(observations);
        let run = engine.score_as_of(date(), None).unwrap();

        for result in &run.results {
            assert_relative_eq!(result.composite_score, 50.0, epsilon = 1e-12);
            assert_relative_eq!(result.percentile, 50.0, epsilon = 1e-12);
            for breakdown in &result.breakdown {
                assert!(breakdown.used_robust_fallback);
                assert_relative_eq!(breakdown.z_score, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn member_without_observation_is_skipped_with_warning() {
        let mut universe = StaticUniverse::new();
        universe.insert_group(
            date(),
            PeerGroup::new("equity", ["A", "B", "C"].map(FundId::from)),
        );
        universe.insert_observation(obs("A", "equity", Some(0.10), Some(0.5)));
        universe.insert_observation(obs("B", "equity", Some(0.20), Some(0.6)));

        let engine = ScoringEngine::new(universe.clone(), universe, catalog());
        let run = engine.score_as_of(date(), None).unwrap();

        assert_eq!(run.len(), 2);
        assert_eq!(run.skipped.len(), 1);
        assert_eq!(run.skipped[0].fund_id, FundId::from("C"));
        assert_eq!(run.skipped[0].reason, SkipReason::MissingObservation);
    }

    #[test]
    fn observation_for_non_member_is_ignored() {
        let mut universe = StaticUniverse::new();
        universe.insert_group(date(), PeerGroup::new("equity", ["A", "B"].map(FundId::from)));
        universe.insert_observation(obs("A", "equity", Some(0.10), Some(0.5)));
        universe.insert_observation(obs("B", "equity", Some(0.20), Some(0.6)));
        universe.insert_observation(obs("GHOST", "equity", Some(99.0), Some(9.9)));

        let engine = ScoringEngine::new(universe.clone(), universe, catalog());
        let run = engine.score_as_of(date(), None).unwrap();

        assert_eq!(run.len(), 2);
        assert!(run.result_for(&"GHOST".into()).is_none());
    }

    #[test]
    fn fund_with_no_usable_metrics_is_skipped() {
        let mut observations = two_group_observations();
        observations.push(obs("EMPTY", "equity", None, None));

        let engine = engine_for(observations);
        let run = engine.score_as_of(date(), None).unwrap();

        assert_eq!(run.len(), 8);
        assert_eq!(run.skipped.len(), 1);
        assert_eq!(run.skipped[0].fund_id, FundId::from("EMPTY"));
        assert_eq!(run.skipped[0].reason, SkipReason::NoUsableMetrics);
    }

    #[test]
    fn group_filter_restricts_run() {
        let engine = engine_for(two_group_observations());
        let filter = vec![PeerGroupId::from("bond")];
        let run = engine.score_as_of(date(), Some(&filter)).unwrap();

        assert_eq!(run.len(), 3);
        assert!(run.results.iter().all(|r| r.group_id.as_str() == "bond"));
    }

    #[test]
    fn unknown_group_filter_yields_empty_run() {
        let engine = engine_for(two_group_observations());
        let filter = vec![PeerGroupId::from("commodity")];
        let run = engine.score_as_of(date(), Some(&filter)).unwrap();
        assert!(run.is_empty());
    }

    #[test]
    fn single_fund_matches_bulk_result() {
        let engine = engine_for(two_group_observations());
        let run = engine.score_as_of(date(), None).unwrap();

        for fund in ["EQ1", "EQ4", "BD2"] {
            let fund_id = FundId::from(fund);
            let single = engine.score_single_fund(date(), &fund_id).unwrap();
            assert_eq!(&single, run.result_for(&fund_id).unwrap());
        }
    }

    #[test]
    fn single_fund_not_found() {
        let engine = engine_for(two_group_observations());
        let err = engine.score_single_fund(date(), &"UNKNOWN".into()).unwrap_err();
        assert!(matches!(err, ScoreError::FundNotFound(_)));
    }

    #[test]
    fn single_fund_with_no_usable_metrics_errors() {
        let mut observations = two_group_observations();
        observations.push(obs("EMPTY", "equity", None, None));
        let engine = engine_for(observations);

        let err = engine.score_single_fund(date(), &"EMPTY".into()).unwrap_err();
        assert!(matches!(err, ScoreError::NoUsableMetrics(_)));
    }

    #[test]
    fn breakdowns_follow_catalog_order() {
        let engine = engine_for(two_group_observations());
        let result = engine.score_single_fund(date(), &"EQ1".into()).unwrap();
        let ids: Vec<&str> = result.breakdown.iter().map(|b| b.metric_id.as_str()).collect();
        assert_eq!(ids, vec![RET, EXPENSE]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let universe = StaticUniverse::new();
        let bad_scale = EngineConfig { scale: 0.0, ..EngineConfig::default() };
        assert!(
            ScoringEngine::with_config(universe.clone(), universe.clone(), catalog(), bad_scale)
                .is_err()
        );

        let bad_bound = EngineConfig { clip_bound: -1.0, ..EngineConfig::default() };
        assert!(
            ScoringEngine::with_config(universe.clone(), universe.clone(), catalog(), bad_bound)
                .is_err()
        );

        let bad_min = EngineConfig { min_group_size: 0, ..EngineConfig::default() };
        assert!(
            ScoringEngine::with_config(universe.clone(), universe, catalog(), bad_min).is_err()
        );
    }

    #[test]
    fn custom_config_changes_scale() {
        let observations = two_group_observations();
        let universe = StaticUniverse::from_observations(observations);
        let config = EngineConfig { scale: 30.0, ..EngineConfig::default() };
        let engine =
            ScoringEngine::with_config(universe.clone(), universe, catalog(), config).unwrap();

        let run = engine.score_as_of(date(), None).unwrap();
        for result in &run.results {
            assert!((0.0..=100.0).contains(&result.composite_score));
        }
        assert_relative_eq!(engine.config().scale, 30.0, epsilon = 1e-12);
    }
}
