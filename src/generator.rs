// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end pairing for one session.
//!
//! roster → history index → candidate pools → shuffle → search → records.

use crate::assembler::assemble;
use crate::config::PairingConfig;
use crate::engine::{Counters, MatchingSearch};
use crate::error::PairingError;
use crate::history::HistoryIndex;
use crate::model::{EmailKey, HistoryMap, PairRecord, Participant, PairingList};
use crate::pools::CandidatePools;
use crate::roster::SessionRoster;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info};

/// Produces no-repeat buddy pairings for a session.
#[derive(Debug, Clone, Default)]
pub struct PairingGenerator {
    config: PairingConfig,
}

impl PairingGenerator {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    /// Pair the members of `session_id`, drawing randomness from the
    /// configured source (seeded when a seed is set).
    pub fn generate(
        &self,
        session_id: &str,
        participants: &[Participant],
        histories: &HistoryMap,
    ) -> Result<PairingList, PairingError> {
        let mut rng = self.config.rng();
        self.generate_with_rng(session_id, participants, histories, &mut rng)
    }

    /// Pair the members of `session_id` using `rng` for every random choice.
    ///
    /// Every member appears in exactly one record, and no record repeats a
    /// pairing found in `histories`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        session_id: &str,
        participants: &[Participant],
        histories: &HistoryMap,
        rng: &mut R,
    ) -> Result<PairingList, PairingError> {
        let roster = SessionRoster::select(session_id, participants)?;
        info!(
            session = session_id,
            participants = roster.len(),
            "Generating pairings"
        );

        let index = HistoryIndex::from_histories(histories);
        let mut pools = CandidatePools::build(&roster, &index)?;
        pools.shuffle_each(rng);

        let mut search = MatchingSearch::new(&pools);
        if let Err(reason) = search.run(self.config.max_steps) {
            return Err(PairingError::NoValidPairing {
                roster: roster.emails(),
                candidates: pools.sizes(),
                reason,
            });
        }

        let stats = search.statistics();
        info!(
            steps = stats.get(Counters::Steps),
            backtracks = stats.get(Counters::Backtracks),
            pairs = search.decisions().len(),
            "Pairing found"
        );

        let list = assemble(&search, &roster);
        debug_assert!(validate_pairing(&list.pairings, &index).is_ok());
        Ok(list)
    }
}

/// Check that `pairs` is a set of disjoint pairs none of which appears in
/// the pairing history.
///
/// A pair listed twice is a `RepeatPairing`; a participant appearing in two
/// pairs, or paired with themself, is a `DuplicateParticipant`.
pub fn validate_pairing(pairs: &[PairRecord], history: &HistoryIndex) -> Result<(), PairingError> {
    let mut seen_pairs = HashSet::with_capacity(pairs.len());
    let mut seen_members = HashSet::with_capacity(pairs.len() * 2);
    for pair in pairs {
        let first = EmailKey::new(&pair.participant1_email);
        let second = EmailKey::new(&pair.participant2_email);
        let repeat = PairingError::RepeatPairing {
            participant1: pair.participant1_email.clone(),
            participant2: pair.participant2_email.clone(),
        };

        if history.was_paired_with(&first, &second) {
            debug!("Repeat pairing {} / {}", first, second);
            return Err(repeat);
        }
        let unordered = if first <= second {
            (first.clone(), second.clone())
        } else {
            (second.clone(), first.clone())
        };
        if !seen_pairs.insert(unordered) {
            debug!("Pair {} / {} listed twice", first, second);
            return Err(repeat);
        }
        if first == second || !seen_members.insert(first) {
            return Err(PairingError::DuplicateParticipant {
                email: pair.participant1_email.clone(),
            });
        }
        if !seen_members.insert(second) {
            return Err(PairingError::DuplicateParticipant {
                email: pair.participant2_email.clone(),
            });
        }
    }
    Ok(())
}
