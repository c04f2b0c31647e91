// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for a perfect matching over candidate pools.
//!
//! The search walks participants in a fixed order and commits each
//! unclaimed participant to the first free candidate of its pool. On a dead
//! end the most recent decision is popped, its claims are rewound, and the
//! next candidate of that decision is tried.
//!
//! # Architecture
//!
//! The state is an explicit stack rather than recursion, so it can be
//! stepped and inspected:
//! - `position`: index into the participant order
//! - `candidate_index`: index into the pool of the participant at `position`
//! - `stack`: committed decisions, each `(position, candidate_index)` plus the
//!   claim-trail checkpoint taken before it claimed its pair
//! - `claims`: every participant consumed as a key or as a chosen buddy
//!
//! Each call to [`MatchingSearch::step`] performs one loop iteration:
//! 1. If the participant at `position` is claimed, advance without a decision
//! 2. If the candidate pool is used up, backtrack (fail if the stack is empty)
//! 3. If the candidate is claimed, try the next one
//! 4. Otherwise claim both, push the decision and advance
//!
//! The search succeeds when `position` reaches the end of the order; the
//! stack then holds exactly half as many decisions as there are participants.
//!
//! # Example
//!
//! ```
//! use buddy_pairing::engine::MatchingSearch;
//! use buddy_pairing::pools::CandidatePools;
//!
//! // 0 and 3 may each pair with 1 or 2, and the other way round.
//! let pools = CandidatePools::from_pools(vec![vec![1, 2], vec![0, 3], vec![0, 3], vec![1, 2]]);
//! let mut search = MatchingSearch::new(&pools);
//! search.run(None).unwrap();
//! assert_eq!(search.decisions().len(), 2);
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::pools::CandidatePools;
use crate::trail::ClaimTrail;
use thiserror::Error;

/// One committed pairing on the search stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Index into the participant order.
    pub position: usize,

    /// Index into that participant's candidate pool.
    pub candidate_index: usize,

    /// Claim-trail length before this decision claimed its pair.
    checkpoint: usize,
}

/// Where the search stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// More steps are needed.
    Running,
    /// Every participant is paired.
    Found,
    /// Every alternative has been tried without success.
    Exhausted,
}

/// Why a search produced no matching.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// No perfect matching exists for these pools.
    #[error("every candidate combination was tried")]
    Exhausted,

    /// The caller's step budget ran out first.
    #[error("search stopped after {steps} steps")]
    StepLimit { steps: u64 },
}

/// Explicit-stack backtracking search over a set of candidate pools.
#[derive(Debug)]
pub struct MatchingSearch<'a> {
    pools: &'a CandidatePools,

    /// Participants (roster positions) in the order they are visited.
    order: Vec<usize>,

    stack: Vec<Decision>,

    claims: ClaimTrail,

    position: usize,

    candidate_index: usize,

    status: SearchStatus,

    statistics: Statistics,
}

impl<'a> MatchingSearch<'a> {
    /// Create a search visiting the most constrained participants first.
    ///
    /// Participants are ordered by ascending pool size; ties keep roster
    /// order. The ordering only affects how quickly a matching is found,
    /// never whether one is found.
    pub fn new(pools: &'a CandidatePools) -> Self {
        let mut order: Vec<usize> = (0..pools.len()).collect();
        order.sort_by_key(|&i| pools.pool(i).len());
        Self::with_order(pools, order)
    }

    /// Create a search visiting participants in the given order.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of the pool positions.
    pub fn with_order(pools: &'a CandidatePools, order: Vec<usize>) -> Self {
        let size = pools.len();
        let mut seen = vec![false; size];
        assert_eq!(order.len(), size, "Search order must cover every participant");
        for &i in &order {
            assert!(i < size && !seen[i], "Search order is not a permutation");
            seen[i] = true;
        }

        Self {
            pools,
            order,
            stack: Vec::with_capacity(size / 2),
            claims: ClaimTrail::new(size),
            position: 0,
            candidate_index: 0,
            status: SearchStatus::Running,
            statistics: Statistics::new(),
        }
    }

    /// Execute one iteration of the search loop.
    ///
    /// Once the search has finished, further calls return the final status
    /// without doing any work.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }
        self.statistics.increment_counter(Counters::Steps);

        if self.position == self.order.len() {
            debug_assert_eq!(self.stack.len() * 2, self.order.len());
            self.status = SearchStatus::Found;
            return self.status;
        }

        let participant = self.order[self.position];
        if self.claims.is_claimed(participant) {
            // Chosen as a buddy by an earlier participant.
            self.statistics.increment_counter(Counters::Skips);
            self.advance();
            return self.status;
        }

        let pool = self.pools.pool(participant);
        let Some(&candidate) = pool.get(self.candidate_index) else {
            self.backtrack();
            return self.status;
        };

        if self.claims.is_claimed(candidate) {
            self.statistics.increment_counter(Counters::ClaimedCandidates);
            self.candidate_index += 1;
            return self.status;
        }

        let checkpoint = self.claims.checkpoint();
        self.claims.claim(participant);
        self.claims.claim(candidate);
        self.stack.push(Decision {
            position: self.position,
            candidate_index: self.candidate_index,
            checkpoint,
        });
        self.statistics.increment_counter(Counters::Commits);
        self.advance();
        self.status
    }

    /// Step until the search finishes or `max_steps` iterations have run.
    ///
    /// A step limit makes an infeasible-looking instance fail with
    /// [`SearchFailure::StepLimit`] instead of running to exhaustion. The
    /// limit is checked before each step, so `Some(0)` does no work.
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<(), SearchFailure> {
        loop {
            if self.status == SearchStatus::Running {
                let steps = self.statistics.get(Counters::Steps);
                if max_steps.is_some_and(|limit| steps >= limit) {
                    return Err(SearchFailure::StepLimit { steps });
                }
            }
            match self.step() {
                SearchStatus::Found => return Ok(()),
                SearchStatus::Exhausted => return Err(SearchFailure::Exhausted),
                SearchStatus::Running => {}
            }
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.candidate_index = 0;
    }

    /// Undo the most recent decision and resume at its next candidate.
    fn backtrack(&mut self) {
        let Some(decision) = self.stack.pop() else {
            self.status = SearchStatus::Exhausted;
            return;
        };
        self.statistics.increment_counter(Counters::Backtracks);
        self.claims.rewind_to(decision.checkpoint);
        self.position = decision.position;
        self.candidate_index = decision.candidate_index + 1;
    }

    /// Roster positions `(participant, buddy)` chosen by `decision`.
    pub fn resolve(&self, decision: &Decision) -> (usize, usize) {
        let participant = self.order[decision.position];
        let buddy = self.pools.pool(participant)[decision.candidate_index];
        (participant, buddy)
    }

    /// Committed pairs as roster positions, in commit order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stack.iter().map(|d| self.resolve(d))
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.stack
    }

    pub fn claims(&self) -> &ClaimTrail {
        &self.claims
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn candidate_index(&self) -> usize {
        self.candidate_index
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
