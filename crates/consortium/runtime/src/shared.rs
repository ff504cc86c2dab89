//! Serialized shared access
//!
//! Callers may arrive concurrently, but the consortium executes one
//! mutation at a time: each one runs to completion under the write lock,
//! and the first to take the lock wins. Readers never see a half-applied
//! transition.

use std::sync::Arc;

use consortium_types::{Amount, AirlineRecord, ConsortiumResult, ConsortiumSnapshot, PartyId};
use parking_lot::RwLock;

use crate::consortium::Consortium;
use crate::context::CallContext;
use crate::outcome::{FundingReceipt, RegistrationOutcome, VoteOutcome};
use crate::view::MembershipView;

/// A cloneable handle to one consortium
#[derive(Clone)]
pub struct SharedConsortium {
    inner: Arc<RwLock<Consortium>>,
}

impl SharedConsortium {
    pub fn new(consortium: Consortium) -> Self {
        Self {
            inner: Arc::new(RwLock::new(consortium)),
        }
    }

    /// Run `f` against a consistent view of the state
    pub fn read<R>(&self, f: impl FnOnce(&Consortium) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` as one serialized transaction
    pub fn write<R>(&self, f: impl FnOnce(&mut Consortium) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn register_bootstrap(&self, ctx: &CallContext) -> ConsortiumResult<()> {
        self.write(|c| c.register_bootstrap(ctx))
    }

    pub fn register(&self, candidate: PartyId, ctx: &CallContext) -> ConsortiumResult<RegistrationOutcome> {
        self.write(|c| c.register(candidate, ctx))
    }

    pub fn cast_vote(&self, candidate: PartyId, ctx: &CallContext) -> ConsortiumResult<VoteOutcome> {
        self.write(|c| c.cast_vote(candidate, ctx))
    }

    pub fn fund(&self, amount: Amount, ctx: &CallContext) -> ConsortiumResult<FundingReceipt> {
        self.write(|c| c.fund(amount, ctx))
    }

    pub fn set_operational(&self, operational: bool, caller: &PartyId) -> ConsortiumResult<()> {
        self.write(|c| c.set_operational(operational, caller))
    }

    pub fn airline(&self, id: &PartyId) -> AirlineRecord {
        self.read(|c| c.airline(id))
    }

    pub fn airline_count(&self) -> usize {
        self.read(Consortium::airline_count)
    }

    pub fn votes_for(&self, candidate: &PartyId) -> usize {
        self.read(|c| c.votes_for(candidate))
    }

    pub fn snapshot(&self) -> ConsortiumSnapshot {
        self.read(Consortium::snapshot)
    }
}

impl MembershipView for SharedConsortium {
    fn is_airline(&self, id: &PartyId) -> bool {
        self.read(|c| c.is_airline(id))
    }

    fn is_airline_funded(&self, id: &PartyId) -> bool {
        self.read(|c| c.is_airline_funded(id))
    }

    fn is_operational(&self) -> bool {
        self.read(Consortium::is_operational)
    }

    fn is_active_airline(&self, id: &PartyId) -> bool {
        self.read(|c| c.is_operational() && c.is_airline(id) && c.is_airline_funded(id))
    }
}
