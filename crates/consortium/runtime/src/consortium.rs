//! Consortium: the governance entry point
//!
//! Composes the five components and enforces the cross-component rules.
//! Each mutating method runs in two phases: every precondition is checked
//! against current state, then the writes are applied. The write phase
//! cannot fail, so a rejected call leaves no trace, not even a receipt.

use chrono::Utc;
use consortium_types::{
    AirlineRecord, Amount, AuditJournal, ConsortiumConfig, ConsortiumReceipt, ConsortiumResult,
    ConsortiumSnapshot, PartyId, ReceiptType,
};
use tracing::info;

use crate::access_control::AccessControl;
use crate::airline_registry::{AdmissionRoute, AirlineRegistry};
use crate::context::CallContext;
use crate::funding_ledger::FundingLedger;
use crate::operational_gate::OperationalGate;
use crate::outcome::{FundingReceipt, RegistrationOutcome, VoteOutcome};
use crate::voting_engine::ConsensusVotingEngine;

/// A consortium of airlines governed by funding, sponsorship and quorum
pub struct Consortium {
    config: ConsortiumConfig,

    // --- Components ---
    /// Owner and authorized relays
    access: AccessControl,
    /// Circuit breaker
    gate: OperationalGate,
    /// Self-funding totals
    funding: FundingLedger,
    /// Membership table
    registry: AirlineRegistry,
    /// Ballots and quorum
    voting: ConsensusVotingEngine,
    /// Receipts for committed transitions
    journal: AuditJournal,
}

impl Consortium {
    /// Create an empty, operational consortium administered by `owner`
    pub fn new(owner: PartyId, config: ConsortiumConfig) -> ConsortiumResult<Self> {
        config.validate()?;

        info!(
            owner = %owner,
            admission_threshold = config.admission_threshold,
            minimum_funding = %config.minimum_funding,
            quorum_rule = ?config.quorum_rule,
            "Consortium created"
        );

        Ok(Self {
            access: AccessControl::new(owner),
            gate: OperationalGate::new(),
            funding: FundingLedger::new(config.minimum_funding),
            registry: AirlineRegistry::new(config.admission_threshold),
            voting: ConsensusVotingEngine::new(config.quorum_rule),
            journal: AuditJournal::new(),
            config,
        })
    }

    /// Create with the default configuration
    pub fn with_defaults(owner: PartyId) -> ConsortiumResult<Self> {
        Self::new(owner, ConsortiumConfig::default())
    }

    pub fn config(&self) -> &ConsortiumConfig {
        &self.config
    }

    // =========================================================================
    // MEMBERSHIP
    // =========================================================================

    /// Admit the caller as the founding airline. Succeeds exactly once.
    pub fn register_bootstrap(&mut self, ctx: &CallContext) -> ConsortiumResult<()> {
        self.access
            .check_relay(ctx, self.config.require_authorized_relay)?;

        let ordinal = self.registry.register_bootstrap(&ctx.caller, &self.gate)?;

        self.journal.log_receipt(
            ConsortiumReceipt::new(
                ReceiptType::Bootstrapped,
                ctx.caller.clone(),
                format!("Bootstrap airline registered: {}", ctx.caller),
            )
            .with_metadata("ordinal", ordinal.to_string()),
        );
        Ok(())
    }

    /// Sponsor `candidate` for membership
    ///
    /// While the registry is below the admission threshold the candidate is
    /// admitted outright. From the threshold on, the call becomes a ballot
    /// for the candidate and admission happens only when quorum is reached.
    pub fn register(
        &mut self,
        candidate: PartyId,
        ctx: &CallContext,
    ) -> ConsortiumResult<RegistrationOutcome> {
        self.access
            .check_relay(ctx, self.config.require_authorized_relay)?;

        match self.registry.admission_route() {
            AdmissionRoute::Direct => self
                .admit_directly(candidate, &ctx.caller)
                .map(|ordinal| RegistrationOutcome::Admitted { ordinal }),
            AdmissionRoute::Quorum => self
                .vote_and_admit(candidate, &ctx.caller)
                .map(RegistrationOutcome::from),
        }
    }

    /// Vote for `candidate`. A repeat ballot succeeds without effect.
    ///
    /// Below the admission threshold a vote is a sponsorship and admits
    /// the candidate outright, exactly as `register` would.
    pub fn cast_vote(&mut self, candidate: PartyId, ctx: &CallContext) -> ConsortiumResult<VoteOutcome> {
        self.access
            .check_relay(ctx, self.config.require_authorized_relay)?;

        match self.registry.admission_route() {
            AdmissionRoute::Direct => {
                let ordinal = self.admit_directly(candidate.clone(), &ctx.caller)?;
                Ok(VoteOutcome::Admitted {
                    ordinal,
                    votes: self.voting.votes_for(&candidate),
                })
            }
            AdmissionRoute::Quorum => self.vote_and_admit(candidate, &ctx.caller),
        }
    }

    /// Admit on a funded sponsor's word, returning the new ordinal
    fn admit_directly(&mut self, candidate: PartyId, sponsor: &PartyId) -> ConsortiumResult<u64> {
        self.gate.require_operational()?;
        self.registry.require_participant(sponsor, &self.funding)?;
        self.registry.require_candidate(&candidate)?;

        let ordinal = self.registry.admit(candidate.clone());
        self.voting.record_sponsor(sponsor.clone(), candidate.clone());

        info!(airline = %candidate, sponsor = %sponsor, ordinal, "Airline admitted");
        self.journal.log_receipt(
            ConsortiumReceipt::new(
                ReceiptType::Admitted,
                sponsor.clone(),
                format!("Airline {candidate} admitted by sponsor"),
            )
            .with_subject(candidate)
            .with_metadata("ordinal", ordinal.to_string()),
        );

        Ok(ordinal)
    }

    fn vote_and_admit(&mut self, candidate: PartyId, voter: &PartyId) -> ConsortiumResult<VoteOutcome> {
        let decision = self.voting.cast_vote(
            &candidate,
            voter,
            &self.gate,
            &self.registry,
            &self.funding,
        )?;

        if !decision.recorded {
            return Ok(VoteOutcome::Duplicate {
                votes: decision.votes,
                required: decision.required,
            });
        }

        self.journal.log_receipt(
            ConsortiumReceipt::new(
                ReceiptType::BallotCast,
                voter.clone(),
                format!("Ballot for {candidate}"),
            )
            .with_subject(candidate.clone())
            .with_metadata("votes", decision.votes.to_string())
            .with_metadata("required", decision.required.to_string()),
        );

        if !decision.quorum_reached {
            return Ok(VoteOutcome::Recorded {
                votes: decision.votes,
                required: decision.required,
            });
        }

        let ordinal = self.registry.admit(candidate.clone());

        info!(airline = %candidate, votes = decision.votes, ordinal, "Airline admitted by quorum");
        self.journal.log_receipt(
            ConsortiumReceipt::new(
                ReceiptType::AdmittedByQuorum,
                voter.clone(),
                format!("Airline {candidate} admitted with {} votes", decision.votes),
            )
            .with_subject(candidate)
            .with_metadata("ordinal", ordinal.to_string()),
        );

        Ok(VoteOutcome::Admitted {
            ordinal,
            votes: decision.votes,
        })
    }

    // =========================================================================
    // FUNDING
    // =========================================================================

    /// Contribute `amount` towards the caller's own funding
    pub fn fund(&mut self, amount: Amount, ctx: &CallContext) -> ConsortiumResult<FundingReceipt> {
        self.access
            .check_relay(ctx, self.config.require_authorized_relay)?;

        let receipt = self.funding.fund(amount, &ctx.caller, &self.gate)?;

        self.journal.log_receipt(
            ConsortiumReceipt::new(
                ReceiptType::Funded,
                ctx.caller.clone(),
                format!("Funding of {amount} received"),
            )
            .with_metadata("total", receipt.total.to_string()),
        );
        if receipt.newly_funded {
            self.journal.log_receipt(ConsortiumReceipt::new(
                ReceiptType::FundingThresholdReached,
                ctx.caller.clone(),
                format!("{} reached the funding minimum", ctx.caller),
            ));
        }

        Ok(receipt)
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    /// Switch the circuit breaker. Owner only; works while paused.
    pub fn set_operational(&mut self, operational: bool, caller: &PartyId) -> ConsortiumResult<()> {
        if self.gate.set_operational(operational, caller, &self.access)? {
            self.journal.log_receipt(
                ConsortiumReceipt::new(
                    ReceiptType::OperationalChanged,
                    caller.clone(),
                    if operational {
                        "Consortium resumed"
                    } else {
                        "Consortium paused"
                    },
                )
                .with_metadata("operational", operational.to_string()),
            );
        }
        Ok(())
    }

    /// Let `id` relay calls on behalf of end users
    pub fn authorize(&mut self, id: PartyId, caller: &PartyId) -> ConsortiumResult<()> {
        if self.access.authorize(id.clone(), caller, &self.gate)? {
            self.journal.log_receipt(
                ConsortiumReceipt::new(
                    ReceiptType::CallerAuthorized,
                    caller.clone(),
                    format!("Relay {id} authorized"),
                )
                .with_subject(id),
            );
        }
        Ok(())
    }

    pub fn revoke(&mut self, id: &PartyId, caller: &PartyId) -> ConsortiumResult<()> {
        if self.access.revoke(id, caller, &self.gate)? {
            self.journal.log_receipt(
                ConsortiumReceipt::new(
                    ReceiptType::CallerRevoked,
                    caller.clone(),
                    format!("Relay {id} revoked"),
                )
                .with_subject(id.clone()),
            );
        }
        Ok(())
    }

    pub fn set_testing_mode(&mut self, testing_mode: bool, caller: &PartyId) -> ConsortiumResult<()> {
        if self.gate.set_testing_mode(testing_mode, caller, &self.access)? {
            self.journal.log_receipt(
                ConsortiumReceipt::new(
                    ReceiptType::TestingModeChanged,
                    caller.clone(),
                    format!("Testing mode set to {testing_mode}"),
                )
                .with_metadata("testing_mode", testing_mode.to_string()),
            );
        }
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn is_operational(&self) -> bool {
        self.gate.is_operational()
    }

    pub fn is_testing_mode(&self) -> bool {
        self.gate.is_testing_mode()
    }

    pub fn is_airline(&self, id: &PartyId) -> bool {
        self.registry.is_airline(id)
    }

    pub fn is_airline_funded(&self, id: &PartyId) -> bool {
        self.funding.is_funded(id)
    }

    pub fn funded_amount(&self, id: &PartyId) -> Amount {
        self.funding.funded_amount(id)
    }

    pub fn airline_count(&self) -> usize {
        self.registry.count()
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.registry.is_bootstrapped()
    }

    pub fn votes_for(&self, candidate: &PartyId) -> usize {
        self.voting.votes_for(candidate)
    }

    pub fn has_voted(&self, voter: &PartyId, candidate: &PartyId) -> bool {
        self.voting.has_voted(voter, candidate)
    }

    pub fn voters_for(&self, candidate: &PartyId) -> Vec<PartyId> {
        self.voting.voters_for(candidate)
    }

    /// Non-members holding at least one ballot, sorted
    pub fn pending_candidates(&self) -> Vec<PartyId> {
        let mut pending: Vec<_> = self
            .voting
            .candidates()
            .filter(|c| !self.registry.is_airline(c))
            .cloned()
            .collect();
        pending.sort();
        pending
    }

    /// Votes a candidate needs at the current registry size
    pub fn required_votes(&self) -> usize {
        self.voting.required_votes(self.registry.count())
    }

    pub fn owner(&self) -> &PartyId {
        self.access.owner()
    }

    pub fn is_authorized(&self, id: &PartyId) -> bool {
        self.access.is_authorized(id)
    }

    /// Combined membership and funding view of one party
    pub fn airline(&self, id: &PartyId) -> AirlineRecord {
        AirlineRecord {
            identity: id.clone(),
            registered: self.registry.is_airline(id),
            funded_amount: self.funding.funded_amount(id),
            funded: self.funding.is_funded(id),
            registered_at: self.registry.ordinal(id),
        }
    }

    /// Records for every member, in admission order
    pub fn airlines(&self) -> Vec<AirlineRecord> {
        self.registry
            .members()
            .into_iter()
            .map(|(id, _)| self.airline(&id))
            .collect()
    }

    pub fn journal(&self) -> &AuditJournal {
        &self.journal
    }

    // =========================================================================
    // CONTINUITY
    // =========================================================================

    /// Capture the full state
    pub fn snapshot(&self) -> ConsortiumSnapshot {
        ConsortiumSnapshot {
            config: self.config.clone(),
            owner: self.access.owner().clone(),
            operational: self.gate.is_operational(),
            testing_mode: self.gate.is_testing_mode(),
            authorized_callers: self.access.authorized_callers().cloned().collect(),
            bootstrap_party: self.registry.bootstrap_party().cloned(),
            members: self.registry.members().into_iter().collect(),
            funding: self
                .funding
                .balances()
                .map(|(id, amount)| (id.clone(), *amount))
                .collect(),
            ballots: self.voting.ballots().collect(),
            journal: self.journal.clone(),
            taken_at: Utc::now(),
        }
    }

    /// Rebuild a consortium from a snapshot, rejecting inconsistent state
    pub fn restore(snapshot: ConsortiumSnapshot) -> ConsortiumResult<Self> {
        snapshot.validate()?;

        let ConsortiumSnapshot {
            config,
            owner,
            operational,
            testing_mode,
            authorized_callers,
            bootstrap_party,
            members,
            funding,
            ballots,
            journal,
            taken_at,
        } = snapshot;

        info!(
            owner = %owner,
            members = members.len(),
            ballots = ballots.len(),
            taken_at = %taken_at,
            "Consortium restored from snapshot"
        );

        Ok(Self {
            access: AccessControl::from_parts(owner, authorized_callers),
            gate: OperationalGate::from_parts(operational, testing_mode),
            funding: FundingLedger::from_balances(config.minimum_funding, funding),
            registry: AirlineRegistry::from_parts(config.admission_threshold, bootstrap_party, members),
            voting: ConsensusVotingEngine::from_ballots(config.quorum_rule, ballots),
            journal,
            config,
        })
    }
}
