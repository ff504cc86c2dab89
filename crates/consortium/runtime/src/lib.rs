//! Consortium Governance Runtime
//!
//! Membership governance for a consortium of airlines: a founding member,
//! sponsor-based admission while the consortium is small, quorum voting
//! once it grows, a funding requirement on every participant, and an
//! owner-controlled circuit breaker in front of all of it.
//!
//! # Architecture
//!
//! The [`Consortium`] is the entry point. It composes one component per
//! concern, each owning its own state:
//!
//! - [`OperationalGate`]: Global circuit breaker and testing flag
//! - [`AccessControl`]: Owner identity and authorized relays
//! - [`FundingLedger`]: Cumulative self-funding per party
//! - [`AirlineRegistry`]: Bootstrap, membership and direct admission
//! - [`ConsensusVotingEngine`]: Ballots, tallies and quorum
//!
//! Components read each other but never write each other's state; the
//! facade validates every precondition before applying any write, so a
//! rejected call has no effect.
//!
//! # Key Invariants
//!
//! 1. Exactly one bootstrap party, admitted once
//! 2. Membership and funding are monotonic
//! 3. A voter counts at most once per candidate
//! 4. Only funded members sponsor or vote
//! 5. Nothing mutates while the breaker is off, except the breaker
//!
//! # Example
//!
//! ```rust
//! use consortium_runtime::{CallContext, Consortium};
//! use consortium_types::{Amount, PartyId};
//!
//! let mut consortium = Consortium::with_defaults(PartyId::new("owner")).unwrap();
//! let founder = CallContext::direct(PartyId::new("founder"));
//!
//! consortium.register_bootstrap(&founder).unwrap();
//! consortium.fund(Amount::coins(10), &founder).unwrap();
//! consortium.register(PartyId::new("second"), &founder).unwrap();
//!
//! assert_eq!(consortium.airline_count(), 2);
//! ```

#![deny(unsafe_code)]

pub mod access_control;
pub mod airline_registry;
pub mod config;
pub mod consortium;
pub mod context;
pub mod funding_ledger;
pub mod operational_gate;
pub mod outcome;
pub mod shared;
pub mod view;
pub mod voting_engine;

// Re-export main types for convenience
pub use access_control::AccessControl;
pub use airline_registry::{AdmissionRoute, AirlineRegistry};
pub use config::{load_config, parse_config};
pub use consortium::Consortium;
pub use context::CallContext;
pub use funding_ledger::FundingLedger;
pub use operational_gate::OperationalGate;
pub use outcome::{BallotDecision, FundingReceipt, RegistrationOutcome, VoteOutcome};
pub use shared::SharedConsortium;
pub use view::MembershipView;
pub use voting_engine::ConsensusVotingEngine;
