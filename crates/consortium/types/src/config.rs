//! Governance configuration
//!
//! The admission threshold and quorum rule differed between revisions of
//! the system this crate models, so both are configuration rather than
//! constants.

use crate::{Amount, ConsortiumError, ConsortiumResult};
use serde::{Deserialize, Serialize};

/// Default registry size below which sponsors admit candidates directly
pub const DEFAULT_ADMISSION_THRESHOLD: usize = 4;

/// How many distinct votes a candidate needs, given the registry size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuorumRule {
    /// `ceil(n / 2)`
    #[default]
    HalfRoundedUp,
    /// `n / 2 + 1`
    StrictMajority,
}

impl QuorumRule {
    /// Votes required when the registry holds `members` airlines
    pub fn required_votes(&self, members: usize) -> usize {
        match self {
            QuorumRule::HalfRoundedUp => members.div_ceil(2),
            QuorumRule::StrictMajority => members / 2 + 1,
        }
    }
}

/// Configuration for a consortium instance
///
/// The owner is deliberately absent: it is passed to the constructor so the
/// same configuration can be reused with arbitrary owners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsortiumConfig {
    /// Registry size at which direct admission closes and voting begins
    pub admission_threshold: usize,
    /// Cumulative funding a party needs to sponsor or vote
    pub minimum_funding: Amount,
    /// Quorum arithmetic for delegated admission
    pub quorum_rule: QuorumRule,
    /// Require every membership and funding call to arrive via an authorized relay
    pub require_authorized_relay: bool,
}

impl Default for ConsortiumConfig {
    fn default() -> Self {
        Self {
            admission_threshold: DEFAULT_ADMISSION_THRESHOLD,
            minimum_funding: Amount::coins(10),
            quorum_rule: QuorumRule::HalfRoundedUp,
            require_authorized_relay: false,
        }
    }
}

impl ConsortiumConfig {
    pub fn with_admission_threshold(mut self, threshold: usize) -> Self {
        self.admission_threshold = threshold;
        self
    }

    pub fn with_minimum_funding(mut self, minimum: Amount) -> Self {
        self.minimum_funding = minimum;
        self
    }

    pub fn with_quorum_rule(mut self, rule: QuorumRule) -> Self {
        self.quorum_rule = rule;
        self
    }

    pub fn with_authorized_relay_required(mut self, required: bool) -> Self {
        self.require_authorized_relay = required;
        self
    }

    /// Reject configurations under which nobody could ever be admitted or funded
    pub fn validate(&self) -> ConsortiumResult<()> {
        if self.admission_threshold == 0 {
            return Err(ConsortiumError::InvalidConfig(
                "admission_threshold must be at least 1".into(),
            ));
        }
        if self.minimum_funding.is_zero() {
            return Err(ConsortiumError::InvalidConfig(
                "minimum_funding must be positive".into(),
            ));
        }
        Ok(())
    }
}
