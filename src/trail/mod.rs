// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Claim trail: the set of participants consumed by the current search path.
//!
//! Claims are recorded on a trail so that backtracking is a truncation:
//! each search decision remembers the trail length before it claimed its
//! pair, and rewinding to that checkpoint releases exactly those claims.

/// Set of claimed roster positions with checkpoint/rewind support.
///
/// Invariant: a position is claimed if and only if it appears on the trail.
#[derive(Debug, Clone)]
pub struct ClaimTrail {
    /// `claimed[i]` is true while roster position `i` is on the trail.
    claimed: Vec<bool>,
    /// Claimed positions, oldest first.
    entries: Vec<usize>,
}

impl ClaimTrail {
    /// Create an empty trail for a roster of `size` participants.
    pub fn new(size: usize) -> Self {
        Self {
            claimed: vec![false; size],
            entries: Vec::with_capacity(size),
        }
    }

    /// Current trail length, to be passed back to [`rewind_to`](Self::rewind_to).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Claim roster position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is already claimed; the search must never claim a
    /// participant twice.
    pub fn claim(&mut self, index: usize) {
        assert!(!self.claimed[index], "Participant {} claimed twice", index);
        self.claimed[index] = true;
        self.entries.push(index);
    }

    /// Release every claim made after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while self.entries.len() > checkpoint {
            if let Some(index) = self.entries.pop() {
                self.claimed[index] = false;
            }
        }
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed[index]
    }

    /// Claimed positions in claim order.
    pub fn claimed(&self) -> &[usize] {
        &self.entries
    }

    /// Number of claimed participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
