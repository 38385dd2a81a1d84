#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod statistics;
pub use statistics::{GroupStatistics, MetricStatistics};

mod normalize;
pub use normalize::normalize_metric;

mod combine;
pub use combine::composite_score;

mod rank;
pub use rank::assign_percentiles;

mod engine;
pub use engine::{EngineConfig, ScoringEngine};

mod universe;
pub use universe::StaticUniverse;

mod error;
pub use error::EngineError;

/// Re-export commonly used types.
pub mod prelude {
    pub use peerscore_traits::{FundScorer, ObservationSource, PeerGroupSource, ScoreError};

    pub use super::{EngineConfig, EngineError, ScoringEngine, StaticUniverse};
}
