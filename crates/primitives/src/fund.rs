//! Fund and peer group type definitions.

use std::collections::BTreeSet;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Unique identifier for a fund.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct FundId(pub String);

impl FundId {
    /// Create a new fund ID.
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

impl From<&str> for FundId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a peer group (typically an asset class).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct PeerGroupId(pub String);

impl PeerGroupId {
    /// Create a new peer group ID.
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

impl From<&str> for PeerGroupId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The set of funds compared against one another for one as-of date.
///
/// Membership is derived per as-of date from the external fund catalog; a
/// fund can migrate between groups across dates, so groups are never
/// reused across snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerGroup {
    id: PeerGroupId,
    members: BTreeSet<FundId>,
}

impl PeerGroup {
    /// Create a new peer group from its member funds.
    #[must_use]
    pub fn new(id: impl Into<PeerGroupId>, members: impl IntoIterator<Item = FundId>) -> Self {
        Self { id: id.into(), members: members.into_iter().collect() }
    }

    /// Group identifier.
    #[must_use]
    pub const fn id(&self) -> &PeerGroupId {
        &self.id
    }

    /// Member funds, in sorted order.
    #[must_use]
    pub const fn members(&self) -> &BTreeSet<FundId> {
        &self.members
    }

    /// Whether the fund belongs to this group.
    #[must_use]
    pub fn contains(&self, fund_id: &FundId) -> bool {
        self.members.contains(fund_id)
    }

    /// Number of member funds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fund_id_from_str() {
        let id: FundId = "F001".into();
        assert_eq!(id.as_str(), "F001");
    }

    #[test]
    fn peer_group_membership() {
        let group = PeerGroup::new("equity-large", vec![FundId::from("A"), FundId::from("B")]);
        assert_eq!(group.len(), 2);
        assert!(group.contains(&FundId::from("A")));
        assert!(!group.contains(&FundId::from("C")));
    }

    #[test]
    fn peer_group_members_sorted() {
        let group = PeerGroup::new(
            "bond",
            vec![FundId::from("C"), FundId::from("A"), FundId::from("B")],
        );
        let ordered: Vec<&str> = group.members().iter().map(FundId::as_str).collect();
        assert_eq!(ordered, vec!["A", "B", "C"]);
    }

    #[test]
    fn peer_group_dedupes_members() {
        let group = PeerGroup::new("mixed", vec![FundId::from("A"), FundId::from("A")]);
        assert_eq!(group.len(), 1);
    }
}
