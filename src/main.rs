// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `buddy` - pair session participants with buddies they have never met.

use anyhow::Result;
use buddy_pairing::commands::{self, CreatePairingsOptions, UpdateHistoryOptions};
use buddy_pairing::config::{PairingConfig, NEW_PAIRINGS_FILE, PAIRING_HISTORY_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "buddy", version, about = "Random no-repeat buddy pairings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create random pairings for a session.
    CreatePairings(CreatePairingsArgs),
    /// Add a pairing list to the pairing history.
    UpdateHistory(UpdateHistoryArgs),
}

#[derive(Args, Debug)]
struct CreatePairingsArgs {
    /// Session to pair.
    #[arg(short, long)]
    session_id: String,

    /// Folder holding the participant and history files.
    #[arg(short = 'p', long, env = "BUDDY_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Participant file (default: <data-dir>/Participants.json).
    #[arg(long)]
    participants: Option<PathBuf>,

    /// Pairing history file (default: <data-dir>/PairingHistory.json).
    #[arg(long)]
    history: Option<PathBuf>,

    /// Output file (default: <data-dir>/RandomPairings.json).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for reproducible pairings.
    #[arg(long, env = "BUDDY_SEED")]
    seed: Option<u64>,

    /// Give up after this many search steps.
    #[arg(long, env = "BUDDY_MAX_STEPS")]
    max_steps: Option<u64>,

    /// Overwrite the output file if it exists.
    #[arg(short, long)]
    force: bool,
}

#[derive(Args, Debug)]
struct UpdateHistoryArgs {
    /// Pairing list produced by create-pairings.
    #[arg(short = 'n', long, default_value = NEW_PAIRINGS_FILE)]
    pairings: PathBuf,

    /// Existing pairing history.
    #[arg(short = 'H', long, default_value = PAIRING_HISTORY_FILE)]
    history: PathBuf,

    /// Where to write the updated history. Replacing the input history
    /// requires --force.
    #[arg(short = 'u', long, default_value = PAIRING_HISTORY_FILE)]
    output: PathBuf,

    /// Overwrite the output file if it exists.
    #[arg(short, long)]
    force: bool,
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::CreatePairings(args) => {
            let options = CreatePairingsOptions {
                session_id: args.session_id,
                data_dir: args.data_dir,
                participants: args.participants,
                history: args.history,
                output: args.output,
                config: PairingConfig {
                    seed: args.seed,
                    max_steps: args.max_steps,
                },
                force: args.force,
            };
            let list = commands::create_pairings(&options)?;
            for pair in &list.pairings {
                println!(
                    "{} <{}>  +  {} <{}>",
                    pair.participant1_name,
                    pair.participant1_email,
                    pair.participant2_name,
                    pair.participant2_email
                );
            }
        }
        Command::UpdateHistory(args) => {
            let summary = commands::update_history(&UpdateHistoryOptions {
                pairings: args.pairings,
                history: args.history,
                output: args.output,
                force: args.force,
            })?;
            println!(
                "{} history records created, {} updated",
                summary.created, summary.updated
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("buddy v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
