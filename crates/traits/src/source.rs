//! External data source trait definitions.

use peerscore_primitives::{Date, FundObservation, PeerGroup, PeerGroupId};

/// Errors raised by the external data sources.
///
/// Source failures are always fatal to a scoring request: the engine
/// never partially scores a stale universe.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The peer group source could not be reached or answered invalidly.
    #[error("peer group source unavailable: {0}")]
    PeerGroupsUnavailable(String),

    /// The observation source could not be reached or answered invalidly.
    #[error("observation source unavailable: {0}")]
    ObservationsUnavailable(String),
}

/// Provider of peer group membership per as-of date.
pub trait PeerGroupSource: Send + Sync {
    /// Peer groups exactly as of the given date.
    ///
    /// Membership must reflect the fund/asset-class mapping for that
    /// date; groups from other dates must never be reused.
    ///
    /// # Errors
    /// Returns `SourceError` when the source is unreachable.
    fn peer_groups(&self, as_of: Date) -> Result<Vec<PeerGroup>, SourceError>;
}

/// Provider of fund observations per as-of date.
pub trait ObservationSource: Send + Sync {
    /// Observations for the given date, optionally restricted to one
    /// peer group.
    ///
    /// A metric unavailable for a fund must be returned as null, never
    /// silently coerced to zero.
    ///
    /// # Errors
    /// Returns `SourceError` when the source is unreachable.
    fn observations(
        &self,
        as_of: Date,
        group_id: Option<&PeerGroupId>,
    ) -> Result<Vec<FundObservation>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_display() {
        let err = SourceError::PeerGroupsUnavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = SourceError::ObservationsUnavailable("timeout".to_string());
        assert!(err.to_string().contains("timeout"));
    }
}
