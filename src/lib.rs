// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random buddy pairings that never repeat a previous pairing.
//!
//! Given the participants of a session and everyone's pairing history, the
//! crate produces a randomized perfect matching in which no two people are
//! paired again, or a typed error explaining why none exists.
//!
//! # Architecture
//!
//! All structures are built fresh for each run and dropped afterwards:
//!
//! - [`roster::SessionRoster`]: the session's participants, reduced to identity
//!   and validated (non-empty, even, no duplicate emails)
//! - [`history::HistoryIndex`]: case-insensitive lookup of prior buddies
//! - [`pools::CandidatePools`]: for each participant, who they may still meet;
//!   an empty pool fails fast before any search
//! - [`random::shuffle`]: Fisher–Yates shuffle of each pool over an injected
//!   random source
//! - [`engine::MatchingSearch`]: explicit-stack backtracking over the pools,
//!   with claims kept on a [`trail::ClaimTrail`]
//! - [`assembler::assemble`]: decision stack to pair records
//!
//! [`generator::PairingGenerator`] runs these steps for one session. The
//! [`store`], [`history::updater`] and [`commands`] modules provide the JSON
//! files and the `buddy` command line around it.
//!
//! # Search Algorithm
//!
//! Participants are visited most-constrained-first. Each unclaimed
//! participant commits to the first free candidate in its shuffled pool; a
//! participant with no free candidate pops the latest decision and retries it
//! with its next candidate. The search is exhaustive over the pool orders, so
//! it finds a matching whenever one exists.
//!
//! # Example
//!
//! ```
//! use buddy_pairing::config::PairingConfig;
//! use buddy_pairing::model::{HistoryMap, Participant};
//! use buddy_pairing::PairingGenerator;
//!
//! let participants = vec![
//!     Participant::new("Ada", "ada@example.org").with_session("spring"),
//!     Participant::new("Bob", "bob@example.org").with_session("spring"),
//! ];
//! let generator = PairingGenerator::new(PairingConfig::default().with_seed(7));
//! let list = generator.generate("spring", &participants, &HistoryMap::new()).unwrap();
//! assert_eq!(list.pairings.len(), 1);
//! ```

pub mod assembler;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod history;
pub mod model;
pub mod pools;
pub mod random;
pub mod roster;
pub mod store;
pub mod trail;

// Re-export commonly used types
pub use engine::{MatchingSearch, SearchFailure, SearchStatus};
pub use error::{PairingError, PairingErrorKind, StoreError};
pub use generator::{validate_pairing, PairingGenerator};
pub use trail::ClaimTrail;
