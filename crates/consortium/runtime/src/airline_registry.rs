//! Airline Registry: the membership table
//!
//! Holds who is in and in what order they were admitted. The registry is
//! the only writer of membership; the voting engine decides when a
//! candidate has reached quorum, but the registry performs the admission.

use std::collections::HashMap;

use consortium_types::{ConsortiumError, ConsortiumResult, PartyId};
use tracing::info;

use crate::funding_ledger::FundingLedger;
use crate::operational_gate::OperationalGate;

/// How a candidate gets in at the current registry size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdmissionRoute {
    /// Below the threshold: one funded sponsor suffices
    Direct,
    /// At or above the threshold: the candidate needs a quorum of votes
    Quorum,
}

/// Membership state with the bootstrap and direct-admission rules
pub struct AirlineRegistry {
    /// Registry size at which direct admission closes
    admission_threshold: usize,
    /// The founding member
    bootstrap_party: Option<PartyId>,
    /// Members and their admission ordinals
    members: HashMap<PartyId, u64>,
}

impl AirlineRegistry {
    pub fn new(admission_threshold: usize) -> Self {
        Self {
            admission_threshold,
            bootstrap_party: None,
            members: HashMap::new(),
        }
    }

    /// Rebuild from persisted state
    pub fn from_parts(
        admission_threshold: usize,
        bootstrap_party: Option<PartyId>,
        members: impl IntoIterator<Item = (PartyId, u64)>,
    ) -> Self {
        Self {
            admission_threshold,
            bootstrap_party,
            members: members.into_iter().collect(),
        }
    }

    /// Admit the very first caller, unconditionally and exactly once
    ///
    /// The founder is exempt from the funding requirement: nobody funded
    /// exists yet to sponsor it.
    pub fn register_bootstrap(
        &mut self,
        caller: &PartyId,
        gate: &OperationalGate,
    ) -> ConsortiumResult<u64> {
        gate.require_operational()?;

        if self.bootstrap_party.is_some() {
            return Err(ConsortiumError::AlreadyBootstrapped);
        }

        self.bootstrap_party = Some(caller.clone());
        let ordinal = self.admit(caller.clone());

        info!(airline = %caller, "Bootstrap airline registered");
        Ok(ordinal)
    }

    /// Fail with `NotFunded` unless `id` is both registered and funded
    pub fn require_participant(&self, id: &PartyId, funding: &FundingLedger) -> ConsortiumResult<()> {
        if self.is_airline(id) && funding.is_funded(id) {
            Ok(())
        } else {
            Err(ConsortiumError::NotFunded(id.clone()))
        }
    }

    /// Fail with `AlreadyRegistered` if `candidate` is already a member
    pub fn require_candidate(&self, candidate: &PartyId) -> ConsortiumResult<()> {
        if self.is_airline(candidate) {
            Err(ConsortiumError::AlreadyRegistered(candidate.clone()))
        } else {
            Ok(())
        }
    }

    pub fn admission_route(&self) -> AdmissionRoute {
        if self.count() < self.admission_threshold {
            AdmissionRoute::Direct
        } else {
            AdmissionRoute::Quorum
        }
    }

    /// Insert a validated candidate. Callers check preconditions first.
    pub(crate) fn admit(&mut self, candidate: PartyId) -> u64 {
        let ordinal = self.members.len() as u64;
        self.members.entry(candidate).or_insert(ordinal);
        ordinal
    }

    pub fn is_airline(&self, id: &PartyId) -> bool {
        self.members.contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrap_party.is_some()
    }

    pub fn bootstrap_party(&self) -> Option<&PartyId> {
        self.bootstrap_party.as_ref()
    }

    /// Admission order of a member (0 = founder)
    pub fn ordinal(&self, id: &PartyId) -> Option<u64> {
        self.members.get(id).copied()
    }

    /// Members in admission order
    pub fn members(&self) -> Vec<(PartyId, u64)> {
        let mut members: Vec<_> = self
            .members
            .iter()
            .map(|(id, ordinal)| (id.clone(), *ordinal))
            .collect();
        members.sort_by_key(|(_, ordinal)| *ordinal);
        members
    }
}
