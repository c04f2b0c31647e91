// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The set of participants taking part in one session.
//!
//! Selection strips everything but identity (key, email, display name) and
//! checks the input shape before any matching work starts.

use crate::error::PairingError;
use crate::model::{EmailKey, Participant};
use std::collections::HashSet;

/// A participant reduced to what matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMember {
    pub key: EmailKey,
    pub email: String,
    pub name: String,
}

impl From<&Participant> for SessionMember {
    fn from(p: &Participant) -> Self {
        Self {
            key: p.key(),
            email: p.email.clone(),
            name: p.name.clone(),
        }
    }
}

/// Participants whose membership list contains the session id.
///
/// Members keep the input order; positions in this roster are the indices
/// used by candidate pools and the search.
#[derive(Debug, Clone)]
pub struct SessionRoster {
    session_id: String,
    members: Vec<SessionMember>,
}

impl SessionRoster {
    /// Select and validate the members of `session_id`.
    ///
    /// Fails with `SessionNotFound` when nobody joined the session,
    /// `DuplicateParticipant` when two members share an email, and
    /// `OddParticipantCount` when the members cannot all be paired.
    pub fn select(session_id: &str, participants: &[Participant]) -> Result<Self, PairingError> {
        let members: Vec<SessionMember> = find_participants_in_session(session_id, participants)
            .map(SessionMember::from)
            .collect();

        if members.is_empty() {
            return Err(PairingError::SessionNotFound {
                session_id: session_id.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !seen.insert(&member.key) {
                return Err(PairingError::DuplicateParticipant {
                    email: member.email.clone(),
                });
            }
        }

        let roster = Self {
            session_id: session_id.to_string(),
            members,
        };
        if roster.len() % 2 != 0 {
            return Err(PairingError::OddParticipantCount {
                session_id: roster.session_id.clone(),
                count: roster.len(),
                roster: roster.emails(),
            });
        }
        Ok(roster)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn members(&self) -> &[SessionMember] {
        &self.members
    }

    pub fn member(&self, index: usize) -> &SessionMember {
        &self.members[index]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member emails in roster order, for diagnostics.
    pub fn emails(&self) -> Vec<String> {
        self.members.iter().map(|m| m.email.clone()).collect()
    }
}

/// Participants that joined `session_id`, compared case-insensitively.
pub fn find_participants_in_session<'a>(
    session_id: &'a str,
    participants: &'a [Participant],
) -> impl Iterator<Item = &'a Participant> + 'a {
    participants.iter().filter(move |p| p.in_session(session_id))
}
