//! Fund scoring trait definitions.

use peerscore_primitives::{Date, FundId, PeerGroupId, ScoreResult, ScoreRun};

use crate::SourceError;

/// Errors that can occur during a scoring request.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// An external source failed; nothing was scored.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// The fund or its peer group could not be resolved for the date.
    #[error("fund not found for requested date: {0}")]
    FundNotFound(FundId),

    /// The fund resolved but has no metric that can contribute to a
    /// composite score.
    #[error("fund has no usable metrics: {0}")]
    NoUsableMetrics(FundId),

    /// Invalid engine configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScoreError {
    /// Returns whether this error describes a localized data problem
    /// rather than a failed request.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoUsableMetrics(_))
    }
}

/// The scoring contract exposed to collaborators.
///
/// Both the bulk batch caller (table and report views) and the
/// interactive preview caller depend on this one contract, so a single
/// implementation serves both and their outputs cannot drift.
pub trait FundScorer: Send + Sync {
    /// Score the whole universe for one as-of date.
    ///
    /// `group_filter` restricts scoring to the named peer groups. Safe
    /// to call with zero funds or zero groups; the result is an empty
    /// run, not an error.
    ///
    /// # Errors
    /// Returns `ScoreError::Source` when either external source fails.
    fn score_as_of(
        &self,
        as_of: Date,
        group_filter: Option<&[PeerGroupId]>,
    ) -> Result<ScoreRun, ScoreError>;

    /// Score one fund for one as-of date.
    ///
    /// Scores are peer-relative, so this still computes the fund's full
    /// peer group; the latency profile matches a full recompute of that
    /// group and callers must not assume a cheaper incremental path.
    ///
    /// # Errors
    /// Returns `FundNotFound` when the fund or its group cannot be
    /// resolved, `NoUsableMetrics` when the fund cannot be scored.
    fn score_single_fund(&self, as_of: Date, fund_id: &FundId) -> Result<ScoreResult, ScoreError>;
}
