//! Results of successful governance calls
//!
//! A successful `register` or `cast_vote` does not imply admission: the
//! outcome says whether a ballot was accepted, whether it was a repeat,
//! and whether the candidate got in.

use consortium_types::{Amount, PartyId};
use serde::{Deserialize, Serialize};

/// Result of a funding contribution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingReceipt {
    pub party: PartyId,
    /// Amount contributed by this call
    pub amount: Amount,
    /// Cumulative funding after this call
    pub total: Amount,
    /// Whether the party meets the minimum after this call
    pub funded: bool,
    /// Whether this call is the one that crossed the minimum
    pub newly_funded: bool,
}

/// What the voting engine decided for one ballot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BallotDecision {
    /// False when the ballot already existed
    pub recorded: bool,
    /// Distinct voters for the candidate after this call
    pub votes: usize,
    /// Votes needed at the current registry size
    pub required: usize,
    /// This ballot brought the tally to quorum
    pub quorum_reached: bool,
}

/// Result of `register(candidate)`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// Admitted directly by a funded sponsor while the registry was small
    Admitted { ordinal: u64 },
    /// Ballot recorded; candidate still pending
    VoteRecorded { votes: usize, required: usize },
    /// Ballot recorded and it completed the quorum
    AdmittedByQuorum { ordinal: u64, votes: usize },
    /// The sponsor had already voted for this candidate; nothing changed
    AlreadyVoted { votes: usize, required: usize },
}

impl RegistrationOutcome {
    /// Whether the candidate is a member after this call
    pub fn is_admitted(&self) -> bool {
        matches!(
            self,
            RegistrationOutcome::Admitted { .. } | RegistrationOutcome::AdmittedByQuorum { .. }
        )
    }
}

/// Result of `cast_vote(candidate)`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VoteOutcome {
    /// Ballot recorded; candidate still pending
    Recorded { votes: usize, required: usize },
    /// Ballot recorded and the candidate was admitted
    Admitted { ordinal: u64, votes: usize },
    /// Repeat ballot: accepted as a no-op
    Duplicate { votes: usize, required: usize },
}

impl VoteOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, VoteOutcome::Admitted { .. })
    }
}

impl From<VoteOutcome> for RegistrationOutcome {
    fn from(outcome: VoteOutcome) -> Self {
        match outcome {
            VoteOutcome::Recorded { votes, required } => {
                RegistrationOutcome::VoteRecorded { votes, required }
            }
            VoteOutcome::Admitted { ordinal, votes } => {
                RegistrationOutcome::AdmittedByQuorum { ordinal, votes }
            }
            VoteOutcome::Duplicate { votes, required } => {
                RegistrationOutcome::AlreadyVoted { votes, required }
            }
        }
    }
}
