// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate pools: who each session member may still be paired with.

use crate::error::PairingError;
use crate::history::HistoryIndex;
use crate::random::shuffle;
use crate::roster::SessionRoster;
use rand::Rng;
use tracing::debug;

/// For every roster position, the roster positions it may be paired with.
///
/// Invariants: a pool never contains its owner, never contains duplicates,
/// never contains a previous buddy, and only refers to roster positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePools {
    pools: Vec<Vec<usize>>,
}

impl CandidatePools {
    /// Compute the pools for `roster`, excluding anyone in `history`.
    ///
    /// Fails fast with `NoEligibleBuddy` for the first member whose pool is
    /// empty; no search is attempted in that case.
    pub fn build(roster: &SessionRoster, history: &HistoryIndex) -> Result<Self, PairingError> {
        let members = roster.members();
        let mut pools = Vec::with_capacity(members.len());

        for (i, member) in members.iter().enumerate() {
            let pool: Vec<usize> = members
                .iter()
                .enumerate()
                .filter(|(j, other)| {
                    *j != i
                        && other.key != member.key
                        && !history.was_paired_with(&member.key, &other.key)
                })
                .map(|(j, _)| j)
                .collect();

            if pool.is_empty() {
                return Err(PairingError::NoEligibleBuddy {
                    participant: member.email.clone(),
                    history: history.entries(&member.key).map(<[_]>::to_vec),
                    roster: roster.emails(),
                });
            }
            debug!("{} has {} candidate(s)", member.email, pool.len());
            pools.push(pool);
        }

        Ok(Self { pools })
    }

    /// Wrap precomputed pools, mainly for exercising the search directly.
    ///
    /// # Panics
    ///
    /// Panics if a pool refers to its owner or to a position outside the roster.
    pub fn from_pools(pools: Vec<Vec<usize>>) -> Self {
        let size = pools.len();
        for (owner, pool) in pools.iter().enumerate() {
            for &candidate in pool {
                assert!(
                    candidate < size && candidate != owner,
                    "Invalid candidate {} in pool of {}",
                    candidate,
                    owner
                );
            }
        }
        Self { pools }
    }

    /// Randomize the order of every pool.
    pub fn shuffle_each<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for pool in &mut self.pools {
            shuffle(pool, rng);
        }
    }

    /// Candidates of roster position `index`, in trial order.
    pub fn pool(&self, index: usize) -> &[usize] {
        &self.pools[index]
    }

    /// Pool length of every roster position, in roster order.
    pub fn sizes(&self) -> Vec<usize> {
        self.pools.iter().map(Vec::len).collect()
    }

    /// Number of roster positions covered.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
