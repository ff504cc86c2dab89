//! Consensus Voting Engine: quorum-based admission
//!
//! Ballots are kept per candidate as a set of distinct voters, so the tally
//! is the set size and a repeat ballot cannot inflate it. Quorum is judged
//! against the registry size when the deciding ballot arrives.

use std::collections::{HashMap, HashSet};

use consortium_types::{Ballot, ConsortiumResult, PartyId, QuorumRule};
use tracing::{debug, info};

use crate::airline_registry::AirlineRegistry;
use crate::funding_ledger::FundingLedger;
use crate::operational_gate::OperationalGate;
use crate::outcome::BallotDecision;

/// Ballot store and quorum arithmetic
pub struct ConsensusVotingEngine {
    quorum_rule: QuorumRule,
    /// candidate -> distinct voters
    votes: HashMap<PartyId, HashSet<PartyId>>,
}

impl ConsensusVotingEngine {
    pub fn new(quorum_rule: QuorumRule) -> Self {
        Self {
            quorum_rule,
            votes: HashMap::new(),
        }
    }

    /// Rebuild from persisted ballots
    pub fn from_ballots(quorum_rule: QuorumRule, ballots: impl IntoIterator<Item = Ballot>) -> Self {
        let mut engine = Self::new(quorum_rule);
        for ballot in ballots {
            engine.insert(ballot.voter, ballot.candidate);
        }
        engine
    }

    /// Record `voter`'s support for `candidate`
    ///
    /// The returned decision says whether quorum was reached; admitting the
    /// candidate is left to the caller so that membership keeps a single
    /// writer. A repeat ballot succeeds without touching state.
    pub fn cast_vote(
        &mut self,
        candidate: &PartyId,
        voter: &PartyId,
        gate: &OperationalGate,
        registry: &AirlineRegistry,
        funding: &FundingLedger,
    ) -> ConsortiumResult<BallotDecision> {
        gate.require_operational()?;
        registry.require_participant(voter, funding)?;
        registry.require_candidate(candidate)?;

        let required = self.required_votes(registry.count());

        if self.has_voted(voter, candidate) {
            let votes = self.votes_for(candidate);
            debug!(voter = %voter, candidate = %candidate, votes, "Duplicate ballot ignored");
            return Ok(BallotDecision {
                recorded: false,
                votes,
                required,
                quorum_reached: false,
            });
        }

        self.insert(voter.clone(), candidate.clone());
        let votes = self.votes_for(candidate);
        let quorum_reached = votes >= required;

        info!(
            voter = %voter,
            candidate = %candidate,
            votes,
            required,
            quorum_reached,
            "Ballot cast"
        );

        Ok(BallotDecision {
            recorded: true,
            votes,
            required,
            quorum_reached,
        })
    }

    /// Record the sponsor of a direct admission as that candidate's voter
    pub(crate) fn record_sponsor(&mut self, sponsor: PartyId, candidate: PartyId) {
        self.insert(sponsor, candidate);
    }

    fn insert(&mut self, voter: PartyId, candidate: PartyId) -> bool {
        self.votes.entry(candidate).or_default().insert(voter)
    }

    /// Distinct voters for `candidate`
    pub fn votes_for(&self, candidate: &PartyId) -> usize {
        self.votes.get(candidate).map_or(0, HashSet::len)
    }

    pub fn has_voted(&self, voter: &PartyId, candidate: &PartyId) -> bool {
        self.votes
            .get(candidate)
            .is_some_and(|voters| voters.contains(voter))
    }

    /// Voters for `candidate`, sorted for stable output
    pub fn voters_for(&self, candidate: &PartyId) -> Vec<PartyId> {
        let mut voters: Vec<_> = self
            .votes
            .get(candidate)
            .map(|v| v.iter().cloned().collect())
            .unwrap_or_default();
        voters.sort();
        voters
    }

    /// Every party that has received a ballot, admitted or not
    pub fn candidates(&self) -> impl Iterator<Item = &PartyId> {
        self.votes.keys()
    }

    /// Votes needed to admit a candidate with `members` registered airlines
    pub fn required_votes(&self, members: usize) -> usize {
        self.quorum_rule.required_votes(members)
    }

    /// Every ballot ever recorded
    pub fn ballots(&self) -> impl Iterator<Item = Ballot> + '_ {
        self.votes.iter().flat_map(|(candidate, voters)| {
            voters
                .iter()
                .map(move |voter| Ballot::new(voter.clone(), candidate.clone()))
        })
    }
}
