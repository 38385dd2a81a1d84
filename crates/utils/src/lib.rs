#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod clean;
pub use clean::sanitize_metrics;

mod frame;
pub use frame::{FUND_ID_COLUMN, PEER_GROUP_COLUMN, observations_from_frame, run_to_frame};

mod error;
pub use error::UtilsError;
