//! # peerscore
//!
//! Peer-relative fund scoring: given a snapshot of fund performance
//! metrics for an as-of date, compute a composite 0-100 score and a
//! within-peer-group percentile rank for every fund.
//!
//! This crate provides a unified interface to the peerscore ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Trait abstractions
//! - `math`: Statistics kernels
//! - `engine`: The scoring pipeline
//! - `utils`: Dataframe utilities
//! - `cli`: The `score` command-line tool
//!
//! ## Example
//!
//! ```rust,ignore
//! use peerscore::engine::{ScoringEngine, StaticUniverse};
//! use peerscore::traits::FundScorer;
//!
//! let universe = StaticUniverse::from_observations(observations);
//! let engine = ScoringEngine::new(universe.clone(), universe, catalog);
//! let run = engine.score_as_of(as_of, None)?;
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use peerscore_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use peerscore_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use peerscore_math as math;
#[cfg(feature = "engine")]
#[doc(inline)]
pub use peerscore_engine as engine;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use peerscore_utils as utils;
