//! Consortium Governance Domain Types
//!
//! This crate defines the domain types for a consortium of cooperating
//! parties ("airlines") that jointly admit new members.
//!
//! # Key Concepts
//!
//! - **Party**: an opaque identity. Equality is the only operation that
//!   carries meaning.
//! - **Bootstrap**: the one-time, unconditional admission of the founding
//!   member.
//! - **Funding**: a party whose cumulative contribution meets the minimum
//!   threshold may sponsor and vote.
//! - **Ballot**: a single voter's support for a candidate, unique per
//!   `(voter, candidate)` pair.
//! - **Audit Journal**: every committed transition produces a receipt.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. All types
//! implement `Clone`, `Debug`, `Serialize`, `Deserialize`. IDs use the
//! newtype pattern and implement `Display` and `new()`.

#![deny(unsafe_code)]

mod airline;
mod audit;
mod config;
mod errors;
mod party;
mod snapshot;

pub use airline::*;
pub use audit::*;
pub use config::*;
pub use errors::*;
pub use party::*;
pub use snapshot::*;
