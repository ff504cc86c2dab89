//! Access Control: the owner and the authorized relay set
//!
//! The owner is fixed at construction. Authorized callers model the trust
//! between a driving application layer and this core as an explicit
//! allowlist: any identity on the list may relay calls for end users, and
//! the core never needs to know anything else about it.

use std::collections::HashSet;

use consortium_types::{ConsortiumError, ConsortiumResult, PartyId};
use tracing::{info, warn};

use crate::context::CallContext;
use crate::operational_gate::OperationalGate;

/// Owner identity plus the set of authorized relays
pub struct AccessControl {
    /// Administrator, immutable after construction
    owner: PartyId,
    /// Identities allowed to relay calls on behalf of end users
    authorized: HashSet<PartyId>,
}

impl AccessControl {
    pub fn new(owner: PartyId) -> Self {
        Self {
            owner,
            authorized: HashSet::new(),
        }
    }

    /// Rebuild from persisted state
    pub fn from_parts(owner: PartyId, authorized: impl IntoIterator<Item = PartyId>) -> Self {
        Self {
            owner,
            authorized: authorized.into_iter().collect(),
        }
    }

    pub fn owner(&self) -> &PartyId {
        &self.owner
    }

    pub fn is_owner(&self, caller: &PartyId) -> bool {
        *caller == self.owner
    }

    pub fn is_authorized(&self, id: &PartyId) -> bool {
        self.authorized.contains(id)
    }

    pub fn authorized_callers(&self) -> impl Iterator<Item = &PartyId> {
        self.authorized.iter()
    }

    /// Fail with `Unauthorized` unless `caller` is the owner
    pub fn require_owner(&self, caller: &PartyId) -> ConsortiumResult<()> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            warn!(caller = %caller, "Owner-only operation rejected");
            Err(ConsortiumError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }

    /// Validate the relay of a call attributed to an end user
    ///
    /// A present relay must be authorized. When `relay_required` is set, a
    /// call without a relay is rejected as well.
    pub fn check_relay(&self, ctx: &CallContext, relay_required: bool) -> ConsortiumResult<()> {
        match &ctx.relay {
            Some(relay) if self.is_authorized(relay) => Ok(()),
            Some(relay) => {
                warn!(relay = %relay, caller = %ctx.caller, "Call from unauthorized relay rejected");
                Err(ConsortiumError::Unauthorized {
                    caller: relay.clone(),
                })
            }
            None if relay_required => {
                warn!(caller = %ctx.caller, "Direct call rejected: relay required");
                Err(ConsortiumError::Unauthorized {
                    caller: ctx.caller.clone(),
                })
            }
            None => Ok(()),
        }
    }

    /// Grant relay capability. Returns `true` if newly granted.
    pub fn authorize(
        &mut self,
        id: PartyId,
        caller: &PartyId,
        gate: &OperationalGate,
    ) -> ConsortiumResult<bool> {
        self.require_owner(caller)?;
        gate.require_operational()?;

        let added = self.authorized.insert(id.clone());
        if added {
            info!(caller_id = %id, "Caller authorized");
        }
        Ok(added)
    }

    /// Withdraw relay capability. Returns `true` if it was held.
    pub fn revoke(
        &mut self,
        id: &PartyId,
        caller: &PartyId,
        gate: &OperationalGate,
    ) -> ConsortiumResult<bool> {
        self.require_owner(caller)?;
        gate.require_operational()?;

        let removed = self.authorized.remove(id);
        if removed {
            info!(caller_id = %id, "Caller authorization revoked");
        }
        Ok(removed)
    }
}
