// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Turning a finished search into pair records.

use crate::engine::MatchingSearch;
use crate::model::{PairRecord, PairingList};
use crate::roster::SessionRoster;

/// Build the pairing list from the decisions of a successful search.
///
/// Records follow commit order on the stack. The participant whose decision
/// it was is `participant1`; the chosen candidate is `participant2`.
pub fn assemble(search: &MatchingSearch<'_>, roster: &SessionRoster) -> PairingList {
    let pairings = search
        .pairs()
        .map(|(participant, buddy)| {
            let first = roster.member(participant);
            let second = roster.member(buddy);
            PairRecord {
                participant1_name: first.name.clone(),
                participant1_email: first.email.clone(),
                participant2_name: second.name.clone(),
                participant2_email: second.email.clone(),
            }
        })
        .collect();

    PairingList {
        session_id: roster.session_id().to_string(),
        pairings,
    }
}
