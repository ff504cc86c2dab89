//! Audit journal: receipts for committed governance transitions
//!
//! Rejected calls never produce receipts, so the journal is an exact log
//! of what changed and who caused it.

use crate::PartyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of committed transition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptType {
    Bootstrapped,
    Admitted,
    AdmittedByQuorum,
    BallotCast,
    Funded,
    FundingThresholdReached,
    OperationalChanged,
    CallerAuthorized,
    CallerRevoked,
    TestingModeChanged,
}

/// A receipt for one committed transition
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsortiumReceipt {
    /// Unique receipt identifier
    pub receipt_id: String,
    /// Type of receipt
    pub receipt_type: ReceiptType,
    /// The party that triggered the transition
    pub actor: PartyId,
    /// The party the transition applies to, when different from the actor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<PartyId>,
    /// Human-readable description
    pub description: String,
    /// When the receipt was created
    pub timestamp: DateTime<Utc>,
    /// Additional metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ConsortiumReceipt {
    pub fn new(receipt_type: ReceiptType, actor: PartyId, description: impl Into<String>) -> Self {
        Self {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            receipt_type,
            actor,
            subject: None,
            description: description.into(),
            timestamp: Utc::now(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_subject(mut self, subject: PartyId) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Append-only log of receipts
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditJournal {
    pub receipts: Vec<ConsortiumReceipt>,
}

impl AuditJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a receipt
    pub fn log_receipt(&mut self, receipt: ConsortiumReceipt) {
        self.receipts.push(receipt);
    }

    /// Get all receipts for a specific actor
    pub fn receipts_for_actor(&self, actor: &PartyId) -> Vec<&ConsortiumReceipt> {
        self.receipts.iter().filter(|r| r.actor == *actor).collect()
    }

    /// Get all receipts of one type, oldest first
    pub fn receipts_of_type(&self, receipt_type: &ReceiptType) -> Vec<&ConsortiumReceipt> {
        self.receipts
            .iter()
            .filter(|r| r.receipt_type == *receipt_type)
            .collect()
    }

    /// Total number of receipts
    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }

    pub fn last(&self) -> Option<&ConsortiumReceipt> {
        self.receipts.last()
    }
}
