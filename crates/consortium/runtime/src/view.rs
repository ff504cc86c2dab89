//! Read-only membership surface for dependent subsystems
//!
//! Flight scheduling and insurance live outside this crate. They only ask
//! three questions of the consortium, and they ask them through this trait.

use consortium_types::PartyId;

use crate::consortium::Consortium;

/// What an external collaborator may observe
pub trait MembershipView {
    fn is_airline(&self, id: &PartyId) -> bool;

    fn is_airline_funded(&self, id: &PartyId) -> bool;

    fn is_operational(&self) -> bool;

    /// Registered and funded: may act as an airline elsewhere
    fn is_active_airline(&self, id: &PartyId) -> bool {
        self.is_operational() && self.is_airline(id) && self.is_airline_funded(id)
    }
}

impl MembershipView for Consortium {
    fn is_airline(&self, id: &PartyId) -> bool {
        Consortium::is_airline(self, id)
    }

    fn is_airline_funded(&self, id: &PartyId) -> bool {
        Consortium::is_airline_funded(self, id)
    }

    fn is_operational(&self) -> bool {
        Consortium::is_operational(self)
    }
}
