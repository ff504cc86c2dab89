//! Airline records and ballots
//!
//! An airline record is a read model assembled from the registry (who is
//! in, and in what order) and the funding ledger (how much each party has
//! contributed). Neither component owns the whole record.

use crate::{Amount, PartyId};
use serde::{Deserialize, Serialize};

/// Membership and funding state of a single party
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRecord {
    /// The party's identity
    pub identity: PartyId,
    /// Whether the party has been admitted. Never reverts to false.
    pub registered: bool,
    /// Cumulative self-funding. Never decreases.
    pub funded_amount: Amount,
    /// Whether `funded_amount` meets the configured minimum
    pub funded: bool,
    /// Admission order (0 = bootstrap party); `None` until admitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<u64>,
}

impl AirlineRecord {
    /// A record for a party nobody has seen yet
    pub fn unknown(identity: PartyId) -> Self {
        Self {
            identity,
            registered: false,
            funded_amount: Amount::ZERO,
            funded: false,
            registered_at: None,
        }
    }

    /// Registered and funded: allowed to sponsor and vote
    pub fn is_participant(&self) -> bool {
        self.registered && self.funded
    }
}

/// A voter's recorded support for a candidate
///
/// Ballots are keyed by the ordered pair, so the set of ballots can never
/// hold two votes from the same voter for the same candidate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: PartyId,
    pub candidate: PartyId,
}

impl Ballot {
    pub fn new(voter: PartyId, candidate: PartyId) -> Self {
        Self { voter, candidate }
    }
}

impl std::fmt::Display for Ballot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.voter, self.candidate)
    }
}
