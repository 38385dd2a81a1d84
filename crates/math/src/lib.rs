#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod stats;
pub use stats::{DISPERSION_EPSILON, DistributionSummary};

mod zscore;
pub use zscore::{MAD_SCALE, robust_z, standard_z};

mod winsorize;
pub use winsorize::{ZClip, clamp_z};

mod percentile;
pub use percentile::rank_percentiles;

mod error;
pub use error::MathError;
