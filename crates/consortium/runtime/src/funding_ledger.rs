//! Funding Ledger: cumulative self-funding per party
//!
//! Balances only ever grow. Crossing the minimum is what makes a party
//! "funded"; there is no way back.

use std::collections::HashMap;

use consortium_types::{Amount, ConsortiumError, ConsortiumResult, PartyId};
use tracing::info;

use crate::operational_gate::OperationalGate;
use crate::outcome::FundingReceipt;

/// Per-party funding totals against a fixed minimum
pub struct FundingLedger {
    /// Threshold for "funded"
    minimum: Amount,
    /// Cumulative contributions
    balances: HashMap<PartyId, Amount>,
}

impl FundingLedger {
    pub fn new(minimum: Amount) -> Self {
        Self {
            minimum,
            balances: HashMap::new(),
        }
    }

    /// Rebuild from persisted state
    pub fn from_balances(
        minimum: Amount,
        balances: impl IntoIterator<Item = (PartyId, Amount)>,
    ) -> Self {
        Self {
            minimum,
            balances: balances.into_iter().collect(),
        }
    }

    /// Add `amount` to the caller's own total
    pub fn fund(
        &mut self,
        amount: Amount,
        caller: &PartyId,
        gate: &OperationalGate,
    ) -> ConsortiumResult<FundingReceipt> {
        gate.require_operational()?;

        if amount.is_zero() {
            return Err(ConsortiumError::InsufficientFunding { amount });
        }

        let before = self.funded_amount(caller);
        let total = before
            .checked_add(amount)
            .ok_or_else(|| ConsortiumError::FundingOverflow(caller.clone()))?;

        self.balances.insert(caller.clone(), total);

        let was_funded = before >= self.minimum;
        let funded = total >= self.minimum;

        info!(
            party = %caller,
            amount = %amount,
            total = %total,
            funded,
            "Funding received"
        );

        Ok(FundingReceipt {
            party: caller.clone(),
            amount,
            total,
            funded,
            newly_funded: funded && !was_funded,
        })
    }

    pub fn funded_amount(&self, id: &PartyId) -> Amount {
        self.balances.get(id).copied().unwrap_or_default()
    }

    pub fn is_funded(&self, id: &PartyId) -> bool {
        self.funded_amount(id) >= self.minimum
    }

    /// Every party that has contributed anything
    pub fn balances(&self) -> impl Iterator<Item = (&PartyId, &Amount)> {
        self.balances.iter()
    }
}
