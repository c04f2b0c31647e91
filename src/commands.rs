// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `buddy` subcommands, independent of argument parsing.

use crate::config::{PairingConfig, NEW_PAIRINGS_FILE, PAIRING_HISTORY_FILE, PARTICIPANTS_FILE};
use crate::error::StoreError;
use crate::generator::PairingGenerator;
use crate::history::{update_histories, UpdateSummary};
use crate::model::PairingList;
use crate::store;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs of `create-pairings`.
#[derive(Debug, Clone)]
pub struct CreatePairingsOptions {
    pub session_id: String,
    pub data_dir: PathBuf,
    pub participants: Option<PathBuf>,
    pub history: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: PairingConfig,
    pub force: bool,
}

impl CreatePairingsOptions {
    pub fn new(session_id: &str, data_dir: &Path) -> Self {
        Self {
            session_id: session_id.to_string(),
            data_dir: data_dir.to_path_buf(),
            participants: None,
            history: None,
            output: None,
            config: PairingConfig::default(),
            force: false,
        }
    }

    fn resolve(&self, explicit: &Option<PathBuf>, default_name: &str) -> PathBuf {
        explicit
            .clone()
            .unwrap_or_else(|| self.data_dir.join(default_name))
    }
}

/// Generate a pairing for the session and write it out.
pub fn create_pairings(options: &CreatePairingsOptions) -> Result<PairingList> {
    let participants_path = options.resolve(&options.participants, PARTICIPANTS_FILE);
    let history_path = options.resolve(&options.history, PAIRING_HISTORY_FILE);
    let output_path = options.resolve(&options.output, NEW_PAIRINGS_FILE);

    let participants = store::load_participants(&participants_path)
        .context("Failed to load participants")?;
    let histories = store::load_histories(&history_path)
        .context("Failed to load pairing history")?;

    let list = PairingGenerator::new(options.config)
        .generate(&options.session_id, &participants, &histories)
        .with_context(|| format!("Cannot pair session '{}'", options.session_id))?;

    store::write_json(&output_path, &list, options.force)
        .context("Failed to write pairings")?;
    info!(
        "{} pairs for session '{}' written to {}",
        list.pairings.len(),
        list.session_id,
        output_path.display()
    );
    Ok(list)
}

/// Inputs of `update-history`.
#[derive(Debug, Clone)]
pub struct UpdateHistoryOptions {
    pub pairings: PathBuf,
    pub history: PathBuf,
    pub output: PathBuf,
    pub force: bool,
}

/// Whether `a` and `b` name the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    if !a.exists() {
        return false;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Fold a pairing list into the pairing history file.
pub fn update_history(options: &UpdateHistoryOptions) -> Result<UpdateSummary> {
    if !options.force && same_file(&options.history, &options.output) {
        return Err(StoreError::SamePath {
            path: options.history.clone(),
        })
        .context("Refusing to replace the history being read");
    }

    let list = store::load_pairing_list(&options.pairings).context("Failed to load pairings")?;
    let mut histories =
        store::load_histories(&options.history).context("Failed to load pairing history")?;

    let summary = update_histories(&mut histories, &list)
        .with_context(|| format!("Cannot record session '{}'", list.session_id))?;

    store::write_json(&options.output, &histories, options.force)
        .context("Failed to write pairing history")?;
    Ok(summary)
}
