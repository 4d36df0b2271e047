//! Core types: moves, ledger records, round DTOs, random sources, configuration, errors.
//!
//! Everything else in the crate is built from these; none of them hold locks
//! except the shared random sources.

pub mod moves;
pub mod error;
pub mod rng;
pub mod config;
pub mod player;
pub mod round;

pub use moves::{Move, Winner};
pub use error::{BetError, ErrorKind, GameError};
pub use rng::{GameRng, RandomSource, ScriptedRandom, SeededRandom};
pub use config::{GameConfig, LedgerConfig, DEFAULT_HISTORY_CAPACITY, DEFAULT_STARTING_COINS};
pub use player::{OpponentStats, PlayerState};
pub use round::{PlayRequest, PlayResponse, PlayerStats, RoundResult, UNKNOWN_OPPONENT};
