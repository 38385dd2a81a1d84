#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod fund;
pub use fund::{FundId, PeerGroup, PeerGroupId};

mod metric;
pub use metric::{CatalogError, Direction, MetricCatalog, MetricDefinition, MetricId};

mod observation;
pub use observation::FundObservation;

mod score;
pub use score::{ScoreBreakdown, ScoreResult, ScoreRun, SkipReason, SkippedFund};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
