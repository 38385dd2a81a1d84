//! Metric catalog type definitions.

use std::collections::HashSet;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Unique identifier for a scorable metric.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct MetricId(pub String);

impl MetricId {
    /// Create a new metric ID.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MetricId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which direction of a metric's raw value counts as "good".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Larger raw values are better (e.g. trailing return, Sharpe ratio).
    HigherIsBetter,
    /// Smaller raw values are better (e.g. expense ratio, volatility).
    LowerIsBetter,
}

impl Direction {
    /// Sign applied to a normalized score so higher always means better.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::HigherIsBetter => 1.0,
            Self::LowerIsBetter => -1.0,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HigherIsBetter => write!(f, "higher-is-better"),
            Self::LowerIsBetter => write!(f, "lower-is-better"),
        }
    }
}

/// A single scorable metric: identity, direction, and combining weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Metric identifier.
    pub id: MetricId,
    /// Direction of goodness.
    pub direction: Direction,
    /// Non-negative combining weight. Weights need not sum to 1; the
    /// combiner normalizes over the metrics a fund actually has.
    pub weight: f64,
}

impl MetricDefinition {
    /// Create a new metric definition.
    #[must_use]
    pub fn new(id: impl Into<MetricId>, direction: Direction, weight: f64) -> Self {
        Self { id: id.into(), direction, weight }
    }
}

/// Errors raised when validating a metric catalog at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The same metric id appears more than once.
    #[error("duplicate metric id: {0}")]
    DuplicateMetric(MetricId),

    /// A weight is negative or not finite.
    #[error("invalid weight for metric {metric}: {weight}")]
    InvalidWeight {
        /// Offending metric.
        metric: MetricId,
        /// Offending weight.
        weight: f64,
    },
}

/// The immutable set of scorable metrics.
///
/// Built once at process start from configuration and validated there:
/// every id unique, every weight finite and non-negative. Iteration order
/// is insertion order and defines the canonical breakdown order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCatalog {
    metrics: Vec<MetricDefinition>,
}

impl MetricCatalog {
    /// Create a validated catalog.
    ///
    /// # Errors
    /// Returns `CatalogError` on a duplicate id or a negative/non-finite
    /// weight.
    pub fn new(metrics: Vec<MetricDefinition>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&MetricId> = HashSet::with_capacity(metrics.len());
        for def in &metrics {
            if !seen.insert(&def.id) {
                return Err(CatalogError::DuplicateMetric(def.id.clone()));
            }
            if !def.weight.is_finite() || def.weight < 0.0 {
                return Err(CatalogError::InvalidWeight {
                    metric: def.id.clone(),
                    weight: def.weight,
                });
            }
        }
        Ok(Self { metrics })
    }

    /// All metric definitions, in catalog order.
    #[must_use]
    pub fn metrics(&self) -> &[MetricDefinition] {
        &self.metrics
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: &MetricId) -> Option<&MetricDefinition> {
        self.metrics.iter().find(|m| &m.id == id)
    }

    /// Number of metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
