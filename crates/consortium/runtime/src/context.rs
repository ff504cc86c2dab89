//! Call attribution
//!
//! A call is always made by an end user (`caller`). It may arrive through a
//! relay, the application layer acting on the user's behalf. Governance
//! rules apply to the caller; the relay only has to be authorized.

use consortium_types::PartyId;
use serde::{Deserialize, Serialize};

/// Who is acting, and through which relay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The party the operation is attributed to
    pub caller: PartyId,
    /// The component forwarding the call, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay: Option<PartyId>,
}

impl CallContext {
    /// A call made by `caller` itself
    pub fn direct(caller: PartyId) -> Self {
        Self {
            caller,
            relay: None,
        }
    }

    /// A call forwarded by `relay` on behalf of `caller`
    pub fn relayed(relay: PartyId, caller: PartyId) -> Self {
        Self {
            caller,
            relay: Some(relay),
        }
    }
}

impl From<PartyId> for CallContext {
    fn from(caller: PartyId) -> Self {
        Self::direct(caller)
    }
}
