// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration and default file names.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Participant records, one JSON array.
pub const PARTICIPANTS_FILE: &str = "Participants.json";

/// Pairing histories keyed by lower-cased email.
pub const PAIRING_HISTORY_FILE: &str = "PairingHistory.json";

/// Output of `create-pairings`, input of `update-history`.
pub const NEW_PAIRINGS_FILE: &str = "RandomPairings.json";

/// Knobs for one pairing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairingConfig {
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Give up after this many search steps.
    pub max_steps: Option<u64>,
}

impl PairingConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// The random source for a run: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
