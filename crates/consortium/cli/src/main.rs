//! Consortium CLI - scripted governance against an in-memory consortium
//!
//! Plays the application layer: it loads a configuration, replays a
//! scenario of funding, registration and voting calls, reports every
//! outcome, and can write the resulting state as a snapshot.

use std::path::PathBuf;

use clap::Parser;
use consortium_runtime::Consortium;
use consortium_types::PartyId;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod output;
mod scenario;

use error::{CliError, CliResult};
use output::{OutputFormat, Summary};

/// Consortium CLI
#[derive(Parser)]
#[command(name = "consortium")]
#[command(about = "Replay airline consortium governance scenarios", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONSORTIUM_CONFIG", default_value = "consortium.toml")]
    config: PathBuf,

    /// Owner identity (administrator of the breaker and relays)
    #[arg(long, env = "CONSORTIUM_OWNER", default_value = "owner")]
    owner: String,

    /// Scenario file: a JSON array of commands
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Write the final state snapshot to this path
    #[arg(long)]
    snapshot_out: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Log level
    #[arg(long, env = "CONSORTIUM_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "CONSORTIUM_LOG_JSON")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    init_tracing(&cli.log_level, cli.json);

    let config = consortium_runtime::load_config(&cli.config)
        .map_err(|e| CliError::Config(e.to_string()))?;
    let mut consortium = Consortium::new(PartyId::new(cli.owner), config)?;

    if let Some(path) = &cli.scenario {
        let commands = scenario::load_scenario(path)?;
        info!(path = %path.display(), commands = commands.len(), "Replaying scenario");

        let reports = scenario::run_scenario(&mut consortium, &commands);
        output::print_steps(&reports, cli.output);
    }

    output::print_summary(Summary::from_consortium(&consortium), cli.output);

    if let Some(path) = &cli.snapshot_out {
        let json = serde_json::to_string_pretty(&consortium.snapshot())?;
        std::fs::write(path, json)?;
        if matches!(cli.output, OutputFormat::Table) {
            output::print_success(&format!("Snapshot written to {}", path.display()));
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log_level.into());

    // Logs go to stderr so reports on stdout stay machine-readable
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
