// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Participant, history and pairing records.
//!
//! Field names follow the JSON files the program reads and writes, so the
//! records round-trip through `serde_json` without adapters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pairing histories keyed by lower-cased email.
pub type HistoryMap = BTreeMap<String, PairingHistory>;

/// Canonical participant identifier: the email, trimmed and lower-cased.
///
/// Emails are compared case-insensitively everywhere; normalizing once at
/// ingestion lets the rest of the crate use plain equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailKey(String);

impl EmailKey {
    pub fn new(email: &str) -> Self {
        Self(email.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person known to the program, with the sessions they joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub participant_id: i64,

    /// Every session this participant signed up for.
    #[serde(default)]
    pub session_participated: Vec<String>,

    pub name: String,

    pub email: String,

    /// Free-form signup answers. Irrelevant to matching.
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl Participant {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            participant_id: 0,
            session_participated: Vec::new(),
            name: name.to_string(),
            email: email.to_string(),
            data: BTreeMap::new(),
        }
    }

    /// Builder-style helper adding a session membership.
    pub fn with_session(mut self, session_id: &str) -> Self {
        self.add_session(session_id);
        self
    }

    pub fn key(&self) -> EmailKey {
        EmailKey::new(&self.email)
    }

    /// Whether this participant joined `session_id` (case-insensitive).
    pub fn in_session(&self, session_id: &str) -> bool {
        let wanted = session_id.to_lowercase();
        self.session_participated
            .iter()
            .any(|s| s.to_lowercase() == wanted)
    }

    /// Record a session membership, ignoring duplicates.
    pub fn add_session(&mut self, session_id: &str) {
        if !self.in_session(session_id) {
            self.session_participated.push(session_id.to_string());
        }
    }
}

/// One prior pairing, seen from one participant's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub buddy_email: String,

    #[serde(rename = "sessionId")]
    pub session_id: String,
}

impl HistoryEntry {
    pub fn new(buddy_email: &str, session_id: &str) -> Self {
        Self {
            buddy_email: buddy_email.to_string(),
            session_id: session_id.to_string(),
        }
    }
}

/// A participant's pairing log, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingHistory {
    pub email: String,

    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl PairingHistory {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            history: Vec::new(),
        }
    }
}

/// One buddy pair for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRecord {
    pub participant1_name: String,
    pub participant1_email: String,
    pub participant2_name: String,
    pub participant2_email: String,
}

/// The pairing produced for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingList {
    #[serde(rename = "sessionId")]
    pub session_id: String,

    pub pairings: Vec<PairRecord>,
}
