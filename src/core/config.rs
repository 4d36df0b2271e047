//! Engine configuration.
//!
//! - `LedgerConfig`: starting balance and history length
//! - `GameConfig`: seed for the shared random source plus the ledger config

use serde::{Deserialize, Serialize};

/// Balance a fresh or reset ledger starts with.
pub const DEFAULT_STARTING_COINS: i64 = 50;

/// Number of recent rounds retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Ledger parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerConfig {
    /// Coins restored on construction and on every reset.
    pub starting_coins: i64,

    /// Maximum rounds kept in the history (oldest evicted first).
    pub history_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_coins: DEFAULT_STARTING_COINS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl LedgerConfig {
    #[must_use]
    pub fn with_starting_coins(mut self, coins: i64) -> Self {
        self.starting_coins = coins;
        self
    }

    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

/// Top-level configuration used by `GameService::from_config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Seed for the random source shared by all opponents.
    /// Same seed and same sequential calls produce the same opponent moves.
    pub seed: u64,

    pub ledger: LedgerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ledger: LedgerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom ledger parameters.
    #[must_use]
    pub fn with_ledger(mut self, ledger: LedgerConfig) -> Self {
        self.ledger = ledger;
        self
    }
}
