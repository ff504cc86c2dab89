//! Output formatting utilities

use colored::*;
use consortium_runtime::Consortium;
use consortium_types::{AirlineRecord, PartyId};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::scenario::StepReport;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Member row in the summary table
#[derive(Debug, Serialize, Tabled)]
pub struct AirlineRow {
    #[tabled(rename = "#")]
    pub ordinal: String,
    pub airline: String,
    pub funded_amount: String,
    pub funded: String,
}

impl From<AirlineRecord> for AirlineRow {
    fn from(record: AirlineRecord) -> Self {
        Self {
            ordinal: record
                .registered_at
                .map(|o| o.to_string())
                .unwrap_or_else(|| "-".into()),
            airline: record.identity.to_string(),
            funded_amount: record.funded_amount.to_string(),
            funded: if record.funded { "yes" } else { "no" }.into(),
        }
    }
}

/// A candidate that has ballots but is not a member
#[derive(Debug, Serialize, Tabled)]
pub struct PendingRow {
    pub candidate: String,
    pub votes: usize,
    pub required: usize,
    pub voters: String,
}

/// End-of-run view of the consortium
#[derive(Debug, Serialize)]
pub struct Summary {
    pub operational: bool,
    pub testing_mode: bool,
    pub airline_count: usize,
    pub required_votes: usize,
    pub airlines: Vec<AirlineRow>,
    pub pending: Vec<PendingRow>,
    pub receipts: usize,
}

impl Summary {
    pub fn from_consortium(consortium: &Consortium) -> Self {
        let pending = consortium
            .pending_candidates()
            .into_iter()
            .map(|candidate| {
                let voters = consortium.voters_for(&candidate);
                PendingRow {
                    votes: voters.len(),
                    required: consortium.required_votes(),
                    voters: voters
                        .iter()
                        .map(PartyId::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                    candidate: candidate.to_string(),
                }
            })
            .collect();

        Self {
            operational: consortium.is_operational(),
            testing_mode: consortium.is_testing_mode(),
            airline_count: consortium.airline_count(),
            required_votes: consortium.required_votes(),
            airlines: consortium
                .airlines()
                .into_iter()
                .map(AirlineRow::from)
                .collect(),
            pending,
            receipts: consortium.journal().receipt_count(),
        }
    }
}

/// Print per-step results
pub fn print_steps(reports: &[StepReport], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            for report in reports {
                let mark = if report.accepted {
                    "✓".green()
                } else if report.terminal {
                    "✗".red().bold()
                } else {
                    "✗".red()
                };
                println!(
                    "{} {:>3}. {} {}",
                    mark,
                    report.step,
                    report.command.bold(),
                    report.detail.dimmed()
                );
            }
        }
        OutputFormat::Json => print_json(&reports),
    }
}

/// Print the end-of-run summary
pub fn print_summary(summary: Summary, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let breaker = if summary.operational {
                "operational".green()
            } else {
                "paused".red()
            };
            println!();
            println!(
                "{} {}  airlines: {}  quorum: {}  receipts: {}",
                "Consortium".bold(),
                breaker,
                summary.airline_count,
                summary.required_votes,
                summary.receipts
            );
            if summary.testing_mode {
                print_warning("testing mode is on");
            }

            if summary.airlines.is_empty() {
                println!("{}", "No airlines".dimmed());
            } else {
                println!("{}", Table::new(summary.airlines));
            }
            if !summary.pending.is_empty() {
                println!("{}", "Pending candidates".bold());
                println!("{}", Table::new(summary.pending));
            }
        }
        OutputFormat::Json => print_json(&summary),
    }
}

fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Cannot render JSON: {e}")),
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}
