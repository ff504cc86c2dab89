//! Adversarial test: concurrent callers racing on a shared consortium.
//!
//! Calls are serialized. Whatever the interleaving, exactly one bootstrap
//! wins, ballots are never double counted, and a candidate is admitted at
//! most once.

use consortium_runtime::{MembershipView, SharedConsortium, VoteOutcome};
use consortium_tests::*;
use consortium_types::{ConsortiumError, PartyId};

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn racing_bootstraps_admit_one_founder() {
    let shared = SharedConsortium::new(empty_consortium());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let shared = shared.clone();
            tokio::spawn(async move { (i, shared.register_bootstrap(&direct(&airline(i)))) })
        })
        .collect();

    let mut founders = Vec::new();
    for handle in handles {
        let (i, result) = handle.await.unwrap();
        match result {
            Ok(()) => founders.push(i),
            Err(e) => assert_eq!(e, ConsortiumError::AlreadyBootstrapped),
        }
    }

    assert_eq!(founders.len(), 1);
    assert_eq!(shared.airline_count(), 1);
    assert!(shared.is_airline(&airline(founders[0])));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn racing_voters_admit_candidate_exactly_once() {
    let shared = SharedConsortium::new(consortium_with_members(8));
    let target = PartyId::new("target");

    // Every member votes several times, concurrently
    let handles: Vec<_> = (0..8)
        .flat_map(|voter| (0..4).map(move |_| voter))
        .map(|voter| {
            let shared = shared.clone();
            let target = target.clone();
            tokio::spawn(async move { shared.cast_vote(target, &direct(&airline(voter))) })
        })
        .collect();

    let mut admissions = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(VoteOutcome::Admitted { votes, .. }) => {
                admissions += 1;
                assert_eq!(votes, 4);
            }
            Ok(_) => {}
            // Ballots arriving after admission
            Err(e) => assert_eq!(e, ConsortiumError::AlreadyRegistered(target.clone())),
        }
    }

    assert_eq!(admissions, 1);
    assert!(shared.is_airline(&target));
    assert_eq!(shared.airline_count(), 9);
    assert_eq!(shared.votes_for(&target), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn pause_races_with_funding() {
    let shared = SharedConsortium::new(empty_consortium());

    let funders: Vec<_> = (0..16)
        .map(|i| {
            let shared = shared.clone();
            tokio::spawn(async move {
                shared.fund(consortium_types::Amount::new(1), &direct(&airline(i)))
            })
        })
        .collect();
    let pauser = {
        let shared = shared.clone();
        tokio::spawn(async move { shared.set_operational(false, &owner()) })
    };

    pauser.await.unwrap().unwrap();
    let mut accepted = 0;
    for handle in funders {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(e) => assert_eq!(e, ConsortiumError::NotOperational),
        }
    }

    // Exactly the accepted contributions are on the books
    let on_books: usize = (0..16)
        .filter(|i| shared.airline(&airline(*i)).funded_amount.0 == 1)
        .count();
    assert_eq!(on_books, accepted);
    assert!(!shared.is_operational());
}
