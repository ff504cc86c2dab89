//! Property tests: tallies count distinct voters, and membership only grows.
//!
//! Random sequences of governance calls are replayed against a consortium
//! and a plain set of accepted ballots kept alongside it.

use consortium_runtime::{Consortium, RegistrationOutcome, VoteOutcome};
use consortium_tests::*;
use consortium_types::{Amount, PartyId};
use proptest::prelude::*;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

const PARTIES: usize = 8;

#[derive(Clone, Debug)]
enum Op {
    Bootstrap(usize),
    Fund(usize, u128),
    Register(usize, usize),
    Vote(usize, usize),
    Pause,
    Resume,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (0..PARTIES).prop_map(Op::Bootstrap),
        3 => (0..PARTIES, 0u128..12).prop_map(|(p, a)| Op::Fund(p, a)),
        4 => (0..PARTIES, 0..PARTIES).prop_map(|(s, c)| Op::Register(s, c)),
        4 => (0..PARTIES, 0..PARTIES).prop_map(|(v, c)| Op::Vote(v, c)),
        1 => Just(Op::Pause),
        1 => Just(Op::Resume),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 1..80)
}

/// Apply `op`, returning the ballot it added, if any
fn apply(c: &mut Consortium, op: &Op) -> Option<(PartyId, PartyId)> {
    match op {
        Op::Bootstrap(p) => {
            let _ = c.register_bootstrap(&direct(&airline(*p)));
            None
        }
        Op::Fund(p, amount) => {
            let _ = c.fund(Amount::new(*amount), &direct(&airline(*p)));
            None
        }
        Op::Register(s, cand) => match c.register(airline(*cand), &direct(&airline(*s))) {
            Ok(RegistrationOutcome::AlreadyVoted { .. }) | Err(_) => None,
            Ok(_) => Some((airline(*s), airline(*cand))),
        },
        Op::Vote(v, cand) => match c.cast_vote(airline(*cand), &direct(&airline(*v))) {
            Ok(VoteOutcome::Duplicate { .. }) | Err(_) => None,
            Ok(_) => Some((airline(*v), airline(*cand))),
        },
        Op::Pause => {
            let _ = c.set_operational(false, &owner());
            None
        }
        Op::Resume => {
            let _ = c.set_operational(true, &owner());
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn tally_equals_distinct_accepted_ballots(ops in arb_ops()) {
        let mut c = empty_consortium();
        let mut ballots: HashSet<(PartyId, PartyId)> = HashSet::new();

        for op in &ops {
            if let Some(ballot) = apply(&mut c, op) {
                ballots.insert(ballot);
            }
        }

        for i in 0..PARTIES {
            let candidate = airline(i);
            let expected = ballots.iter().filter(|(_, cand)| *cand == candidate).count();
            prop_assert_eq!(c.votes_for(&candidate), expected);
            prop_assert_eq!(c.voters_for(&candidate).len(), expected);
        }
    }

    #[test]
    fn membership_and_funding_are_monotonic(ops in arb_ops()) {
        let mut c = empty_consortium();

        for op in &ops {
            let members_before: Vec<bool> = (0..PARTIES).map(|i| c.is_airline(&airline(i))).collect();
            let funding_before: Vec<Amount> = (0..PARTIES).map(|i| c.funded_amount(&airline(i))).collect();
            let votes_before: Vec<usize> = (0..PARTIES).map(|i| c.votes_for(&airline(i))).collect();

            apply(&mut c, op);

            for i in 0..PARTIES {
                let id = airline(i);
                prop_assert!(!members_before[i] || c.is_airline(&id));
                prop_assert!(c.funded_amount(&id) >= funding_before[i]);
                prop_assert!(c.votes_for(&id) >= votes_before[i]);
            }

            let registered = (0..PARTIES).filter(|i| c.is_airline(&airline(*i))).count();
            prop_assert_eq!(c.airline_count(), registered);
        }
    }

    #[test]
    fn every_member_is_founder_or_sponsored(ops in arb_ops()) {
        let mut c = empty_consortium();
        for op in &ops {
            apply(&mut c, op);
        }

        let snapshot = c.snapshot();
        prop_assert!(snapshot.validate().is_ok());

        for (id, ordinal) in &snapshot.members {
            if *ordinal == 0 {
                prop_assert_eq!(Some(id), snapshot.bootstrap_party.as_ref());
            } else {
                // Direct admission and quorum both leave at least one ballot
                prop_assert!(c.votes_for(id) >= 1);
            }
        }
    }
}
