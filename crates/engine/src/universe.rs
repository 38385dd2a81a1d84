//! In-memory universe backing both source contracts.

use std::collections::{BTreeMap, BTreeSet};

use peerscore_primitives::{Date, FundId, FundObservation, PeerGroup, PeerGroupId};
use peerscore_traits::{ObservationSource, PeerGroupSource, SourceError};

/// A fixed, in-memory universe of peer groups and observations.
///
/// Implements both source contracts, keyed by as-of date. Used by the
/// CLI, examples, and tests; production deployments plug in sources
/// backed by the fund catalog and snapshot store instead.
#[derive(Debug, Clone, Default)]
pub struct StaticUniverse {
    groups: BTreeMap<Date, Vec<PeerGroup>>,
    observations: BTreeMap<Date, Vec<FundObservation>>,
}

impl StaticUniverse {
    /// Create an empty universe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a universe from observations alone, deriving each date's
    /// peer groups from the observations' group ids.
    #[must_use]
    pub fn from_observations(observations: Vec<FundObservation>) -> Self {
        let mut members: BTreeMap<(Date, PeerGroupId), BTreeSet<FundId>> = BTreeMap::new();
        for obs in &observations {
            members
                .entry((obs.as_of, obs.group_id.clone()))
                .or_default()
                .insert(obs.fund_id.clone());
        }

        let mut universe = Self::new();
        for ((as_of, group_id), funds) in members {
            universe.insert_group(as_of, PeerGroup::new(group_id, funds));
        }
        for obs in observations {
            universe.insert_observation(obs);
        }
        universe
    }

    /// Register a peer group for a date.
    pub fn insert_group(&mut self, as_of: Date, group: PeerGroup) {
        self.groups.entry(as_of).or_default().push(group);
    }

    /// Register an observation under its own as-of date.
    pub fn insert_observation(&mut self, observation: FundObservation) {
        self.observations.entry(observation.as_of).or_default().push(observation);
    }
}

impl PeerGroupSource for StaticUniverse {
    fn peer_groups(&self, as_of: Date) -> Result<Vec<PeerGroup>, SourceError> {
        Ok(self.groups.get(&as_of).cloned().unwrap_or_default())
    }
}

impl ObservationSource for StaticUniverse {
    fn observations(
        &self,
        as_of: Date,
        group_id: Option<&PeerGroupId>,
    ) -> Result<Vec<FundObservation>, SourceError> {
        let mut observations = self.observations.get(&as_of).cloned().unwrap_or_default();
        if let Some(id) = group_id {
            observations.retain(|obs| &obs.group_id == id);
        }
        Ok(observations)
    }
}
