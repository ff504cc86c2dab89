//! End-to-end test: delegated admission by quorum.
//!
//! Once the registry reaches the admission threshold, registration turns
//! into voting. Quorum is computed from the registry size at the moment
//! each ballot is cast.

use consortium_runtime::{RegistrationOutcome, VoteOutcome};
use consortium_tests::*;
use consortium_types::{ConsortiumError, PartyId, ReceiptType};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn candidate(name: &str) -> PartyId {
    PartyId::new(format!("candidate-{name}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn fifth_airline_needs_two_distinct_votes() {
    let mut c = consortium_with_members(4);
    let fifth = candidate("fifth");
    assert_eq!(c.required_votes(), 2);

    let outcome = c.register(fifth.clone(), &direct(&airline(0))).unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::VoteRecorded {
            votes: 1,
            required: 2
        }
    );
    assert!(!c.is_airline(&fifth));
    assert_eq!(c.votes_for(&fifth), 1);

    let outcome = c.cast_vote(fifth.clone(), &direct(&airline(3))).unwrap();
    assert_eq!(outcome, VoteOutcome::Admitted { ordinal: 4, votes: 2 });
    assert!(c.is_airline(&fifth));
    assert_eq!(c.airline_count(), 5);
}

#[test]
fn register_and_cast_vote_share_one_tally() {
    let mut c = consortium_with_members(4);
    let x = candidate("x");

    c.cast_vote(x.clone(), &direct(&airline(1))).unwrap();
    let outcome = c.register(x.clone(), &direct(&airline(2))).unwrap();

    assert_eq!(
        outcome,
        RegistrationOutcome::AdmittedByQuorum {
            ordinal: 4,
            votes: 2
        }
    );
    assert_eq!(c.voters_for(&x), vec![airline(1), airline(2)]);
}

#[test]
fn quorum_uses_registry_size_at_vote_time() {
    let mut c = consortium_with_members(4);
    let early = candidate("early");
    let late = candidate("late");

    // One ballot for `early` while 2 votes suffice
    c.cast_vote(early.clone(), &direct(&airline(0))).unwrap();

    // `late` gets in first, growing the registry to 5
    c.cast_vote(late.clone(), &direct(&airline(0))).unwrap();
    c.cast_vote(late.clone(), &direct(&airline(1))).unwrap();
    assert!(c.is_airline(&late));
    assert_eq!(c.required_votes(), 3);

    // A second ballot for `early` no longer reaches quorum
    let outcome = c.cast_vote(early.clone(), &direct(&airline(1))).unwrap();
    assert_eq!(
        outcome,
        VoteOutcome::Recorded {
            votes: 2,
            required: 3
        }
    );
    assert!(!c.is_airline(&early));

    let outcome = c.cast_vote(early.clone(), &direct(&airline(2))).unwrap();
    assert!(outcome.is_admitted());
    assert_eq!(c.airline(&early).registered_at, Some(5));
}

#[test]
fn admitted_candidate_cannot_be_voted_for_again() {
    let mut c = consortium_with_members(4);
    let fifth = candidate("fifth");
    c.cast_vote(fifth.clone(), &direct(&airline(0))).unwrap();
    c.cast_vote(fifth.clone(), &direct(&airline(1))).unwrap();

    assert_eq!(
        c.cast_vote(fifth.clone(), &direct(&airline(2))),
        Err(ConsortiumError::AlreadyRegistered(fifth.clone()))
    );
    assert_eq!(c.votes_for(&fifth), 2);
    assert_eq!(c.airline_count(), 5);
}

#[test]
fn votes_persist_for_candidates_never_admitted() {
    let mut c = consortium_with_members(6);
    let hopeful = candidate("hopeful");

    c.cast_vote(hopeful.clone(), &direct(&airline(4))).unwrap();
    assert_eq!(c.votes_for(&hopeful), 1);
    assert!(c.has_voted(&airline(4), &hopeful));
    assert!(!c.has_voted(&airline(5), &hopeful));
    assert!(!c.is_airline(&hopeful));
}

#[test]
fn members_admitted_by_quorum_can_vote_once_funded() {
    let mut c = consortium_with_members(5);
    let next = candidate("next");

    // 5 members: ceil(5/2) = 3
    c.cast_vote(next.clone(), &direct(&airline(4))).unwrap();
    c.cast_vote(next.clone(), &direct(&airline(0))).unwrap();
    let outcome = c.cast_vote(next.clone(), &direct(&airline(2))).unwrap();
    assert_eq!(outcome, VoteOutcome::Admitted { ordinal: 5, votes: 3 });

    assert_eq!(
        c.journal()
            .receipts_of_type(&ReceiptType::AdmittedByQuorum)
            .len(),
        2
    );
}
