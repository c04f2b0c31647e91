// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! File-level tests of the `create-pairings` and `update-history` commands.

mod common;

use buddy_pairing::commands::{create_pairings, update_history, CreatePairingsOptions, UpdateHistoryOptions};
use buddy_pairing::config::{PairingConfig, NEW_PAIRINGS_FILE, PAIRING_HISTORY_FILE, PARTICIPANTS_FILE};
use buddy_pairing::history::UpdateSummary;
use buddy_pairing::model::{HistoryEntry, Participant};
use buddy_pairing::store::{load_histories, load_pairing_list, write_json};
use buddy_pairing::{PairingError, PairingErrorKind, StoreError};
use common::{email, normalized, one_sided_history};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Participants 1, 2, 4, 5 joined "current"; 1 and 2 already met 4 and 5.
fn seed_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let people: Vec<Participant> = (1..=6)
        .map(|i| {
            let p = Participant::new(&format!("Participant {i}"), &email(i)).with_session("old");
            if i == 3 || i == 6 {
                p
            } else {
                p.with_session("current")
            }
        })
        .collect();
    write_json(&dir.path().join(PARTICIPANTS_FILE), &people, false).unwrap();

    let histories = one_sided_history(&[(1, 5), (1, 4), (2, 4), (2, 5)], "old");
    write_json(&dir.path().join(PAIRING_HISTORY_FILE), &histories, false).unwrap();
    dir
}

fn create_options(dir: &TempDir) -> CreatePairingsOptions {
    CreatePairingsOptions {
        config: PairingConfig::default().with_seed(42),
        ..CreatePairingsOptions::new("Current", dir.path())
    }
}

#[test]
fn test_create_pairings_from_files() {
    let dir = seed_data_dir();
    let list = create_pairings(&create_options(&dir)).unwrap();

    let written = load_pairing_list(&dir.path().join(NEW_PAIRINGS_FILE)).unwrap();
    assert_eq!(written, list);
    assert_eq!(
        normalized(&written),
        vec![(email(1), email(2)), (email(4), email(5))]
    );
}

#[test]
fn test_create_pairings_keeps_existing_output() {
    let dir = seed_data_dir();
    create_pairings(&create_options(&dir)).unwrap();

    let err = create_pairings(&create_options(&dir)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::OutputExists { .. })
    ));

    let forced = CreatePairingsOptions {
        force: true,
        ..create_options(&dir)
    };
    create_pairings(&forced).unwrap();
}

#[test]
fn test_create_pairings_reports_typed_error() {
    let dir = seed_data_dir();
    let options = CreatePairingsOptions {
        session_id: "nonexistentsession".to_string(),
        ..create_options(&dir)
    };
    let err = create_pairings(&options).unwrap_err();
    let pairing = err.downcast_ref::<PairingError>().unwrap();
    assert_eq!(pairing.kind(), PairingErrorKind::SessionNotFound);
    assert!(!dir.path().join(NEW_PAIRINGS_FILE).exists());
}

#[test]
fn test_update_history_from_files() {
    let dir = seed_data_dir();
    create_pairings(&create_options(&dir)).unwrap();

    let updated = dir.path().join(format!("updated_{PAIRING_HISTORY_FILE}"));
    let summary = update_history(&UpdateHistoryOptions {
        pairings: dir.path().join(NEW_PAIRINGS_FILE),
        history: dir.path().join(PAIRING_HISTORY_FILE),
        output: updated.clone(),
        force: false,
    })
    .unwrap();
    assert_eq!(summary, UpdateSummary { created: 2, updated: 2 });

    let histories = load_histories(&updated).unwrap();
    assert_eq!(histories.len(), 4);

    let first = &histories[&email(1)].history;
    assert_eq!(first.len(), 3);
    assert_eq!(first[0], HistoryEntry::new(&email(2), "Current"));
    assert_eq!(first[1], HistoryEntry::new(&email(5), "old"));

    let fourth = &histories[&email(4)].history;
    assert_eq!(fourth, &vec![HistoryEntry::new(&email(5), "Current")]);

    // Recording the same session twice would repeat every pair.
    let err = update_history(&UpdateHistoryOptions {
        pairings: dir.path().join(NEW_PAIRINGS_FILE),
        history: updated,
        output: dir.path().join("again.json"),
        force: false,
    })
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<PairingError>().map(PairingError::kind),
        Some(PairingErrorKind::RepeatPairing)
    );
}
