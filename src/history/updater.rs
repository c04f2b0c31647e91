// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Appending a finished session to the pairing history.

use super::HistoryIndex;
use crate::error::PairingError;
use crate::generator::validate_pairing;
use crate::model::{EmailKey, HistoryEntry, HistoryMap, PairingHistory, PairingList};
use tracing::{debug, info};

/// How many history records an update created or extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub created: usize,
    pub updated: usize,
}

/// Record every pair of `pairings` in both participants' histories.
///
/// New entries are prepended so each log stays most-recent-first. The list
/// is checked against the existing history first; a repeat pairing is
/// rejected and `histories` is left untouched.
pub fn update_histories(
    histories: &mut HistoryMap,
    pairings: &PairingList,
) -> Result<UpdateSummary, PairingError> {
    validate_pairing(&pairings.pairings, &HistoryIndex::from_histories(histories))?;

    let mut summary = UpdateSummary::default();
    for pair in &pairings.pairings {
        record(
            histories,
            &pair.participant1_email,
            &pair.participant2_email,
            &pairings.session_id,
            &mut summary,
        );
        record(
            histories,
            &pair.participant2_email,
            &pair.participant1_email,
            &pairings.session_id,
            &mut summary,
        );
    }

    info!(
        session = %pairings.session_id,
        created = summary.created,
        updated = summary.updated,
        "Pairing history updated"
    );
    Ok(summary)
}

fn record(
    histories: &mut HistoryMap,
    email: &str,
    buddy_email: &str,
    session_id: &str,
    summary: &mut UpdateSummary,
) {
    let key = EmailKey::new(email);
    let map_key = existing_key(histories, &key).unwrap_or_else(|| key.as_str().to_string());

    if histories.contains_key(&map_key) {
        summary.updated += 1;
    } else {
        debug!("New pairing history record created for {}", email);
        summary.created += 1;
    }
    histories
        .entry(map_key)
        .or_insert_with(|| PairingHistory::new(email))
        .history
        .insert(0, HistoryEntry::new(buddy_email, session_id));
}

/// The map key already used for `key`, tolerating keys stored with a different case.
fn existing_key(histories: &HistoryMap, key: &EmailKey) -> Option<String> {
    if histories.contains_key(key.as_str()) {
        return Some(key.as_str().to_string());
    }
    histories
        .keys()
        .find(|k| EmailKey::new(k) == *key)
        .cloned()
}
