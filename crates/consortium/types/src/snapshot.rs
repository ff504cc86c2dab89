//! Consortium state snapshots
//!
//! The logical persisted layout: membership table, funding table, ballot
//! set, singleton breaker/owner, authorized-caller set, and the journal.
//! Ordered collections keep serialized output deterministic.

use crate::{
    Amount, AuditJournal, Ballot, ConsortiumConfig, ConsortiumError, ConsortiumResult, PartyId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A complete, self-consistent copy of consortium state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsortiumSnapshot {
    /// Governance parameters in force
    pub config: ConsortiumConfig,
    /// Administrator fixed at construction
    pub owner: PartyId,
    /// Circuit breaker state
    pub operational: bool,
    /// Owner-controlled testing flag
    pub testing_mode: bool,
    /// Identities allowed to relay calls for end users
    pub authorized_callers: BTreeSet<PartyId>,
    /// The founding member, once bootstrapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_party: Option<PartyId>,
    /// Registered airlines and their admission ordinals
    pub members: BTreeMap<PartyId, u64>,
    /// Cumulative funding per party
    pub funding: BTreeMap<PartyId, Amount>,
    /// Every ballot ever cast
    pub ballots: BTreeSet<Ballot>,
    /// Receipts for every committed transition
    pub journal: AuditJournal,
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
}

impl ConsortiumSnapshot {
    /// Check the membership invariants a restored consortium relies on
    pub fn validate(&self) -> ConsortiumResult<()> {
        self.config.validate()?;

        match &self.bootstrap_party {
            None if !self.members.is_empty() => {
                return Err(corrupt("members present without a bootstrap party"));
            }
            Some(founder) if self.members.get(founder) != Some(&0) => {
                return Err(corrupt(format!(
                    "bootstrap party {founder} must be registered with ordinal 0"
                )));
            }
            _ => {}
        }

        let ordinals: BTreeSet<u64> = self.members.values().copied().collect();
        let expected: BTreeSet<u64> = (0..self.members.len() as u64).collect();
        if ordinals != expected {
            return Err(corrupt("admission ordinals must be unique and contiguous"));
        }

        if let Some(ballot) = self
            .ballots
            .iter()
            .find(|b| !self.members.contains_key(&b.voter))
        {
            return Err(corrupt(format!("ballot from non-member: {ballot}")));
        }

        Ok(())
    }
}

fn corrupt(reason: impl Into<String>) -> ConsortiumError {
    ConsortiumError::CorruptSnapshot(reason.into())
}
