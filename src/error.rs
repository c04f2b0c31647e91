// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for pairing generation and persistence.
//!
//! Every failure carries enough context (participant, roster, history) to be
//! diagnosed without re-running the search.

use crate::engine::SearchFailure;
use crate::model::HistoryEntry;
use std::path::PathBuf;
use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

/// Errors raised while computing a pairing for a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// No participant lists the requested session.
    #[error("No participants found for session '{session_id}'")]
    SessionNotFound { session_id: String },

    /// The session cannot be split into pairs.
    #[error(
        "Session '{session_id}' has an odd number of participants ({count}): {}",
        .roster.join(", ")
    )]
    OddParticipantCount {
        session_id: String,
        count: usize,
        roster: Vec<String>,
    },

    /// Two session participants share the same (case-insensitive) email.
    #[error("Session contains multiple participants with email '{email}'")]
    DuplicateParticipant { email: String },

    /// A participant has already been paired with everybody else in the session.
    #[error(
        "Participant '{participant}' has no eligible buddy.\nHistory: {}\nRoster: {}",
        render_history(.history),
        .roster.join(", ")
    )]
    NoEligibleBuddy {
        participant: String,
        history: Option<Vec<HistoryEntry>>,
        roster: Vec<String>,
    },

    /// Every participant has candidates, but no perfect matching exists.
    ///
    /// `candidates[i]` is how many members `roster[i]` had not been paired
    /// with yet.
    #[error(
        "No valid pairing exists ({reason}).\nRoster (eligible buddies): {}",
        render_candidates(.roster, .candidates)
    )]
    NoValidPairing {
        roster: Vec<String>,
        candidates: Vec<usize>,
        reason: SearchFailure,
    },

    /// A proposed pair repeats an earlier pairing.
    #[error("'{participant1}' and '{participant2}' have been paired before")]
    RepeatPairing {
        participant1: String,
        participant2: String,
    },
}

/// Discriminant of [`PairingError`], for callers that render messages by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, IntoStaticStr)]
pub enum PairingErrorKind {
    SessionNotFound,
    OddParticipantCount,
    DuplicateParticipant,
    NoEligibleBuddy,
    NoValidPairing,
    RepeatPairing,
}

impl PairingError {
    pub fn kind(&self) -> PairingErrorKind {
        match self {
            PairingError::SessionNotFound { .. } => PairingErrorKind::SessionNotFound,
            PairingError::OddParticipantCount { .. } => PairingErrorKind::OddParticipantCount,
            PairingError::DuplicateParticipant { .. } => PairingErrorKind::DuplicateParticipant,
            PairingError::NoEligibleBuddy { .. } => PairingErrorKind::NoEligibleBuddy,
            PairingError::NoValidPairing { .. } => PairingErrorKind::NoValidPairing,
            PairingError::RepeatPairing { .. } => PairingErrorKind::RepeatPairing,
        }
    }
}

fn render_history(history: &Option<Vec<HistoryEntry>>) -> String {
    match history {
        None => "(no history)".to_string(),
        Some(entries) if entries.is_empty() => "(no history)".to_string(),
        Some(entries) => entries
            .iter()
            .map(|e| format!("{} [{}]", e.buddy_email, e.session_id))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn render_candidates(roster: &[String], candidates: &[usize]) -> String {
    roster
        .iter()
        .zip(candidates)
        .map(|(email, count)| format!("{email} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while reading or writing the JSON data files.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Participant #{position} in '{}' has no email", .path.display())]
    InvalidParticipant { path: PathBuf, position: usize },

    #[error("Output file '{}' already exists (use --force to overwrite)", .path.display())]
    OutputExists { path: PathBuf },

    #[error("Input and output history files are the same ('{}')", .path.display())]
    SamePath { path: PathBuf },
}
