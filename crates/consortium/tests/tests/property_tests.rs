#[path = "property/ballot_uniqueness.rs"]
mod ballot_uniqueness;

#[path = "property/atomic_rejection.rs"]
mod atomic_rejection;
