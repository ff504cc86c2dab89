//! Adversarial test: only the owner administers the consortium.
//!
//! Members, relays and strangers are all rejected from owner-only calls,
//! and relays cannot grant themselves trust.

use consortium_runtime::CallContext;
use consortium_tests::*;
use consortium_types::{ConsortiumError, PartyId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn intruders() -> Vec<PartyId> {
    vec![airline(0), airline(1), PartyId::new("app"), PartyId::new("mallory")]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn non_owner_cannot_toggle_breaker() {
    let mut c = consortium_with_members(2);

    for intruder in intruders() {
        assert_eq!(
            c.set_operational(false, &intruder),
            Err(ConsortiumError::Unauthorized {
                caller: intruder.clone()
            })
        );
    }
    assert!(c.is_operational());
}

#[test]
fn non_owner_cannot_resume_paused_consortium() {
    let mut c = consortium_with_members(2);
    c.set_operational(false, &owner()).unwrap();

    assert!(matches!(
        c.set_operational(true, &airline(0)),
        Err(ConsortiumError::Unauthorized { .. })
    ));
    assert!(!c.is_operational());
}

#[test]
fn non_owner_cannot_authorize_or_revoke() {
    let mut c = empty_consortium();
    c.authorize(PartyId::new("app"), &owner()).unwrap();
    let receipts = c.journal().receipt_count();

    for intruder in intruders() {
        assert!(matches!(
            c.authorize(intruder.clone(), &intruder),
            Err(ConsortiumError::Unauthorized { .. })
        ));
        assert!(matches!(
            c.revoke(&PartyId::new("app"), &intruder),
            Err(ConsortiumError::Unauthorized { .. })
        ));
    }

    assert!(c.is_authorized(&PartyId::new("app")));
    assert!(!c.is_authorized(&PartyId::new("mallory")));
    assert_eq!(c.journal().receipt_count(), receipts);
}

#[test]
fn owner_check_precedes_breaker_check() {
    let mut c = empty_consortium();
    c.set_operational(false, &owner()).unwrap();

    // A stranger learns nothing about the breaker state
    assert!(matches!(
        c.authorize(PartyId::new("mallory"), &PartyId::new("mallory")),
        Err(ConsortiumError::Unauthorized { .. })
    ));
    assert_eq!(
        c.authorize(PartyId::new("app"), &owner()),
        Err(ConsortiumError::NotOperational)
    );
}

#[test]
fn unauthorized_relay_rejected_before_anything_else() {
    let mut c = consortium_with_members(1);
    let rogue = PartyId::new("rogue-app");

    assert_eq!(
        c.register(airline(1), &CallContext::relayed(rogue.clone(), airline(0))),
        Err(ConsortiumError::Unauthorized {
            caller: rogue.clone()
        })
    );
    assert!(!c.is_airline(&airline(1)));

    // Even with the breaker off, the relay check comes first
    c.set_operational(false, &owner()).unwrap();
    assert_eq!(
        c.register_bootstrap(&CallContext::relayed(rogue.clone(), airline(3))),
        Err(ConsortiumError::Unauthorized { caller: rogue })
    );
}
