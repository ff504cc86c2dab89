//! Scenario files: scripted sequences of governance calls
//!
//! A scenario is a JSON array of commands. Each command names the end user
//! it is attributed to and, optionally, the relay forwarding it. A rejected
//! command is reported and the run continues with the next one.

use std::path::Path;

use consortium_runtime::{CallContext, Consortium};
use consortium_types::{Amount, ConsortiumError, PartyId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// One scripted governance call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Bootstrap {
        caller: PartyId,
        #[serde(default)]
        relay: Option<PartyId>,
    },
    Fund {
        caller: PartyId,
        #[serde(default)]
        relay: Option<PartyId>,
        amount: Amount,
    },
    Register {
        caller: PartyId,
        #[serde(default)]
        relay: Option<PartyId>,
        candidate: PartyId,
    },
    Vote {
        caller: PartyId,
        #[serde(default)]
        relay: Option<PartyId>,
        candidate: PartyId,
    },
    SetOperational {
        caller: PartyId,
        operational: bool,
    },
    Authorize {
        caller: PartyId,
        id: PartyId,
    },
    Revoke {
        caller: PartyId,
        id: PartyId,
    },
    SetTestingMode {
        caller: PartyId,
        enabled: bool,
    },
}

impl Command {
    /// Short human-readable label
    pub fn label(&self) -> String {
        match self {
            Command::Bootstrap { caller, .. } => format!("bootstrap {caller}"),
            Command::Fund { caller, amount, .. } => format!("fund {caller} {amount}"),
            Command::Register {
                caller, candidate, ..
            } => format!("register {candidate} (sponsor {caller})"),
            Command::Vote {
                caller, candidate, ..
            } => format!("vote {candidate} (voter {caller})"),
            Command::SetOperational {
                caller,
                operational,
            } => format!("set_operational {operational} ({caller})"),
            Command::Authorize { caller, id } => format!("authorize {id} ({caller})"),
            Command::Revoke { caller, id } => format!("revoke {id} ({caller})"),
            Command::SetTestingMode { caller, enabled } => {
                format!("set_testing_mode {enabled} ({caller})")
            }
        }
    }

    fn context(caller: &PartyId, relay: &Option<PartyId>) -> CallContext {
        match relay {
            Some(relay) => CallContext::relayed(relay.clone(), caller.clone()),
            None => CallContext::direct(caller.clone()),
        }
    }

    /// Apply the command, returning a description of what happened
    pub fn apply(&self, consortium: &mut Consortium) -> Result<String, ConsortiumError> {
        match self {
            Command::Bootstrap { caller, relay } => {
                consortium.register_bootstrap(&Self::context(caller, relay))?;
                Ok(format!("{caller} is the bootstrap airline"))
            }
            Command::Fund {
                caller,
                relay,
                amount,
            } => {
                let receipt = consortium.fund(*amount, &Self::context(caller, relay))?;
                Ok(format!(
                    "total {} ({})",
                    receipt.total,
                    if receipt.funded { "funded" } else { "not yet funded" }
                ))
            }
            Command::Register {
                caller,
                relay,
                candidate,
            } => {
                let outcome = consortium.register(candidate.clone(), &Self::context(caller, relay))?;
                Ok(serde_json::to_string(&outcome).unwrap_or_else(|_| format!("{outcome:?}")))
            }
            Command::Vote {
                caller,
                relay,
                candidate,
            } => {
                let outcome = consortium.cast_vote(candidate.clone(), &Self::context(caller, relay))?;
                Ok(serde_json::to_string(&outcome).unwrap_or_else(|_| format!("{outcome:?}")))
            }
            Command::SetOperational {
                caller,
                operational,
            } => {
                consortium.set_operational(*operational, caller)?;
                Ok(format!("operational = {operational}"))
            }
            Command::Authorize { caller, id } => {
                consortium.authorize(id.clone(), caller)?;
                Ok(format!("{id} may relay calls"))
            }
            Command::Revoke { caller, id } => {
                consortium.revoke(id, caller)?;
                Ok(format!("{id} may no longer relay calls"))
            }
            Command::SetTestingMode { caller, enabled } => {
                consortium.set_testing_mode(*enabled, caller)?;
                Ok(format!("testing_mode = {enabled}"))
            }
        }
    }
}

/// Result of one scenario step
#[derive(Clone, Debug, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub command: String,
    pub accepted: bool,
    /// Rejected for good: repeating the step can never succeed
    pub terminal: bool,
    pub detail: String,
}

/// Parse a scenario from JSON text
pub fn parse_scenario(contents: &str) -> CliResult<Vec<Command>> {
    serde_json::from_str(contents).map_err(|e| CliError::Scenario(e.to_string()))
}

/// Read and parse a scenario file
pub fn load_scenario(path: impl AsRef<Path>) -> CliResult<Vec<Command>> {
    let contents = std::fs::read_to_string(path)?;
    parse_scenario(&contents)
}

/// Apply every command in order; rejections are recorded, not fatal
pub fn run_scenario(consortium: &mut Consortium, commands: &[Command]) -> Vec<StepReport> {
    commands
        .iter()
        .enumerate()
        .map(|(i, command)| {
            let result = command.apply(consortium);
            debug!(step = i + 1, command = %command.label(), accepted = result.is_ok(), "Scenario step");
            let (accepted, terminal, detail) = match result {
                Ok(detail) => (true, false, detail),
                Err(e) => (false, e.is_terminal(), e.to_string()),
            };
            StepReport {
                step: i + 1,
                command: command.label(),
                accepted,
                terminal,
                detail,
            }
        })
        .collect()
}
