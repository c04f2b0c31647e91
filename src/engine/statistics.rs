// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the matching search, one slot per [`Counters`] variant.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};

#[derive(Debug, EnumCountMacro, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Loop iterations executed.
    Steps,
    /// Pairs committed to the stack.
    Commits,
    /// Positions skipped because an earlier participant already chose them.
    Skips,
    /// Candidates passed over because they were already claimed.
    ClaimedCandidates,
    /// Decisions popped off the stack.
    Backtracks,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
