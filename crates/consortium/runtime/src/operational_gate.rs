//! Operational Gate: the owner-controlled circuit breaker
//!
//! Every mutating operation consults the gate first. The breaker itself
//! stays switchable by the owner while it is off; that is the only way
//! back on.

use consortium_types::{ConsortiumError, ConsortiumResult, PartyId};
use tracing::{info, warn};

use crate::access_control::AccessControl;

/// Global breaker plus the owner's testing flag
pub struct OperationalGate {
    /// When false, every mutation is rejected
    operational: bool,
    /// Owner-controlled marker for test deployments
    testing_mode: bool,
}

impl OperationalGate {
    /// A new gate starts operational
    pub fn new() -> Self {
        Self {
            operational: true,
            testing_mode: false,
        }
    }

    /// Rebuild from persisted state
    pub fn from_parts(operational: bool, testing_mode: bool) -> Self {
        Self {
            operational,
            testing_mode,
        }
    }

    pub fn is_operational(&self) -> bool {
        self.operational
    }

    pub fn is_testing_mode(&self) -> bool {
        self.testing_mode
    }

    /// First precondition of every mutating operation
    pub fn require_operational(&self) -> ConsortiumResult<()> {
        if self.operational {
            Ok(())
        } else {
            Err(ConsortiumError::NotOperational)
        }
    }

    /// Toggle the breaker. Owner only; not itself gated by the breaker.
    ///
    /// Returns `true` if the state changed.
    pub fn set_operational(
        &mut self,
        operational: bool,
        caller: &PartyId,
        access: &AccessControl,
    ) -> ConsortiumResult<bool> {
        access.require_owner(caller)?;

        let changed = self.operational != operational;
        self.operational = operational;

        if changed {
            if operational {
                info!(caller = %caller, "Consortium resumed");
            } else {
                warn!(caller = %caller, "Consortium paused: circuit breaker off");
            }
        }
        Ok(changed)
    }

    /// Toggle testing mode. Owner only, and only while operational.
    pub fn set_testing_mode(
        &mut self,
        testing_mode: bool,
        caller: &PartyId,
        access: &AccessControl,
    ) -> ConsortiumResult<bool> {
        access.require_owner(caller)?;
        self.require_operational()?;

        let changed = self.testing_mode != testing_mode;
        self.testing_mode = testing_mode;
        if changed {
            info!(testing_mode, "Testing mode changed");
        }
        Ok(changed)
    }
}

impl Default for OperationalGate {
    fn default() -> Self {
        Self::new()
    }
}
