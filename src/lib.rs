//! # rps-wager
//!
//! Wagering rock-paper-scissors against AI opponents, with an authoritative
//! player ledger that stays consistent under concurrent rounds.
//!
//! ## Design Principles
//!
//! 1. **Validate Before Mutate**: A round that fails any check leaves the
//!    ledger exactly as it was. No rollback logic exists because none is needed.
//!
//! 2. **One Lock Per Operation**: The ledger sits behind a single mutex held
//!    for the whole of every read or write. Snapshots are never torn.
//!
//! 3. **Closed Opponent Set**: Opponents are a fixed enum of strategies built
//!    once into an immutable registry.
//!
//! 4. **Injected Randomness**: Strategies draw from a `RandomSource`, so a
//!    seeded or scripted source makes every opponent reproducible.
//!
//! ## Modules
//!
//! - `core`: Moves, ledger records, round DTOs, random sources, config, errors
//! - `rules`: Winner resolution and bet validation
//! - `opponents`: Opponent profiles, strategies, registry
//! - `ledger`: The player state service and round history
//! - `game`: Round orchestration

pub mod core;
pub mod rules;
pub mod opponents;
pub mod ledger;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Move, Winner,
    BetError, ErrorKind, GameError,
    GameRng, RandomSource, ScriptedRandom, SeededRandom,
    GameConfig, LedgerConfig,
    OpponentStats, PlayerState,
    PlayRequest, PlayResponse, PlayerStats, RoundResult,
};

pub use crate::rules::{BetValidator, RoundResolver};

pub use crate::opponents::{
    BehaviorType, Difficulty, OpponentProfile,
    OpponentStrategy, Strategy,
    RandomStrategy, WeightedStrategy, PatternStrategy, CheaterStrategy,
    OpponentRegistry,
};

pub use crate::ledger::{PlayerStateService, RoundHistory};

pub use crate::game::GameService;
