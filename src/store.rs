// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading and writing the JSON data files.

use crate::error::StoreError;
use crate::model::{HistoryMap, PairingList, Participant};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the participant list, rejecting records without an email.
pub fn load_participants(path: &Path) -> Result<Vec<Participant>, StoreError> {
    let participants: Vec<Participant> = read_json(path)?;
    if let Some(position) = participants.iter().position(|p| p.key().is_empty()) {
        return Err(StoreError::InvalidParticipant {
            path: path.to_path_buf(),
            position,
        });
    }
    info!("Loaded {} participants from {}", participants.len(), path.display());
    Ok(participants)
}

/// Load pairing histories. A missing file is an empty history.
pub fn load_histories(path: &Path) -> Result<HistoryMap, StoreError> {
    if !path.exists() {
        warn!("No pairing history at {}; starting empty", path.display());
        return Ok(HistoryMap::new());
    }
    let histories: HistoryMap = read_json(path)?;
    info!("Loaded {} pairing histories from {}", histories.len(), path.display());
    Ok(histories)
}

pub fn load_pairing_list(path: &Path) -> Result<PairingList, StoreError> {
    read_json(path)
}

/// Write `value` as indented JSON.
///
/// An existing file is only replaced when `overwrite` is set.
pub fn write_json<T: Serialize>(path: &Path, value: &T, overwrite: bool) -> Result<(), StoreError> {
    if path.exists() && !overwrite {
        return Err(StoreError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}
