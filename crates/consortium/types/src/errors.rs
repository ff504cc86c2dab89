//! Error types for consortium governance
//!
//! Every variant means "rejected, nothing changed". There is no partial
//! success to report.

use crate::{Amount, PartyId};

/// Errors that can occur in consortium operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsortiumError {
    #[error("Unauthorized caller: {caller}")]
    Unauthorized { caller: PartyId },

    #[error("Consortium is not operational")]
    NotOperational,

    #[error("Party is not a funded airline: {0}")]
    NotFunded(PartyId),

    #[error("Airline already registered: {0}")]
    AlreadyRegistered(PartyId),

    #[error("Bootstrap airline already registered")]
    AlreadyBootstrapped,

    #[error("Insufficient funding amount: {amount}")]
    InsufficientFunding { amount: Amount },

    #[error("Funding total would overflow for {0}")]
    FundingOverflow(PartyId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

impl ConsortiumError {
    /// Errors a caller can never recover from by retrying
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ConsortiumError::AlreadyBootstrapped | ConsortiumError::AlreadyRegistered(_)
        )
    }
}

/// Result type alias for consortium operations
pub type ConsortiumResult<T> = Result<T, ConsortiumError>;
