// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pairing history lookup.
//!
//! [`HistoryIndex`] is the immutable view of prior pairings used while
//! matching. The [`updater`] module appends a finished session to the
//! persistent history map.

pub mod updater;

pub use updater::{update_histories, UpdateSummary};

use crate::model::{EmailKey, HistoryEntry, HistoryMap};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
struct IndexedHistory {
    buddies: HashSet<EmailKey>,
    entries: Vec<HistoryEntry>,
}

/// Case-insensitive index from participant to everyone they were paired with.
///
/// A participant missing from the index has no history; that is not an error.
#[derive(Debug, Default)]
pub struct HistoryIndex {
    by_key: HashMap<EmailKey, IndexedHistory>,
}

impl HistoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from the persisted history map.
    ///
    /// Map keys are normalized, so two records whose keys differ only in
    /// case are merged.
    pub fn from_histories(histories: &HistoryMap) -> Self {
        let mut index = Self::new();
        for (email, record) in histories {
            for entry in &record.history {
                index.insert(&EmailKey::new(email), entry.clone());
            }
        }
        index
    }

    /// Record one historical pairing for `key`.
    pub fn insert(&mut self, key: &EmailKey, entry: HistoryEntry) {
        let indexed = self.by_key.entry(key.clone()).or_default();
        indexed.buddies.insert(EmailKey::new(&entry.buddy_email));
        indexed.entries.push(entry);
    }

    /// Whether `id` and `candidate` have been paired before.
    ///
    /// Either participant's log is enough to exclude the pair, so the
    /// result is symmetric even when the stored logs are not.
    pub fn was_paired_with(&self, id: &EmailKey, candidate: &EmailKey) -> bool {
        self.lists(id, candidate) || self.lists(candidate, id)
    }

    fn lists(&self, owner: &EmailKey, buddy: &EmailKey) -> bool {
        self.by_key
            .get(owner)
            .is_some_and(|h| h.buddies.contains(buddy))
    }

    /// The stored history entries for `id`, if any.
    pub fn entries(&self, id: &EmailKey) -> Option<&[HistoryEntry]> {
        self.by_key.get(id).map(|h| h.entries.as_slice())
    }

    /// Number of participants with at least one recorded pairing.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
