//! Carton Notes entry point.
//!
//! Usage:
//!   carton-notes [identity|optional|outcome|all] [--input <STRING>]

use std::process::ExitCode;

use carton_notes::scenarios::report;
use carton_notes::{Fixtures, NotesConfig, NotesError, Scenario};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "carton-notes")]
#[command(about = "Walk through the Identity, Maybe and Outcome containers")]
struct Cli {
    /// Scenario to run
    #[arg(value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Number string for the identity scenario
    #[arg(long, default_value = " 64", allow_hyphen_values = true)]
    input: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let loaded = NotesConfig::from_env();
    let config = loaded.clone().unwrap_or_default();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(error) = loaded {
        tracing::warn!("Failed to load configuration from environment: {error}");
        tracing::info!("Using default configuration");
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &NotesConfig) -> Result<(), NotesError> {
    tracing::debug!(scenario = ?cli.scenario, "running scenario");

    let fixtures = Fixtures::load(config)?;
    for line in report(cli.scenario, &cli.input, &fixtures)? {
        println!("{line}");
    }
    Ok(())
}
