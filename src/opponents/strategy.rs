//! Opponent move policies.
//!
//! The roster is a closed set:
//! - `RandomStrategy`: uniform over the three moves
//! - `WeightedStrategy`: favors one move, splits the rest evenly
//! - `PatternStrategy`: loops a fixed four-move riff
//! - `CheaterStrategy`: usually peeks at the player's move and counters it
//!
//! Strategies see the player's submitted move and the ledger snapshot taken
//! before the round, never the outcome.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::trace;

use crate::core::{Move, PlayRequest, PlayerState, RandomSource};

use super::profile::{BehaviorType, Difficulty, OpponentProfile};

/// Move-generation capability shared by every opponent.
pub trait OpponentStrategy: Send + Sync {
    /// Static descriptive metadata.
    fn profile(&self) -> &OpponentProfile;

    /// Choose this round's move.
    fn next_move(&self, request: &PlayRequest, snapshot: &PlayerState) -> Move;
}

// =============================================================================
// Random
// =============================================================================

/// Marty: picks uniformly, ignoring everything.
pub struct RandomStrategy {
    random: Arc<dyn RandomSource>,
    profile: OpponentProfile,
}

impl RandomStrategy {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self {
            random,
            profile: OpponentProfile::new("marty", "Marty the Maverick", BehaviorType::Random, Difficulty::Easy)
                .with_description("Pure RNG. Picks whichever move the universe whispers."),
        }
    }
}

impl OpponentStrategy for RandomStrategy {
    fn profile(&self) -> &OpponentProfile {
        &self.profile
    }

    fn next_move(&self, _request: &PlayRequest, _snapshot: &PlayerState) -> Move {
        self.random.next_move()
    }
}

// =============================================================================
// Weighted
// =============================================================================

/// Lena: plays `favored` with probability `weight`, otherwise one of the
/// other two moves with equal likelihood.
pub struct WeightedStrategy {
    random: Arc<dyn RandomSource>,
    favored: Move,
    weight: f64,
    profile: OpponentProfile,
}

impl WeightedStrategy {
    pub const DEFAULT_FAVORED: Move = Move::Paper;
    pub const DEFAULT_WEIGHT: f64 = 0.6;

    /// Lena with her usual preference for Paper.
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self::with_preference(random, Self::DEFAULT_FAVORED, Self::DEFAULT_WEIGHT)
    }

    /// Favor an arbitrary move. `weight` is clamped to `[0, 1]`.
    pub fn with_preference(random: Arc<dyn RandomSource>, favored: Move, weight: f64) -> Self {
        Self {
            random,
            favored,
            weight: weight.clamp(0.0, 1.0),
            profile: OpponentProfile::new("lena", "Lucky Lena", BehaviorType::Weighted, Difficulty::Medium)
                .with_description(format!("Prefers {favored} but occasionally mixes things up.")),
        }
    }

    #[must_use]
    pub fn favored(&self) -> Move {
        self.favored
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl OpponentStrategy for WeightedStrategy {
    fn profile(&self) -> &OpponentProfile {
        &self.profile
    }

    fn next_move(&self, _request: &PlayRequest, _snapshot: &PlayerState) -> Move {
        if self.random.next_f64() < self.weight {
            return self.favored;
        }

        let [first, second] = self.favored.others();
        if self.random.next_range(0..2) == 0 {
            first
        } else {
            second
        }
    }
}

// =============================================================================
// Pattern
// =============================================================================

/// Rex: Rock, Paper, Scissors, Scissors, forever.
///
/// The cursor is shared by every caller and only ever moves forward, so
/// concurrent rounds each take a distinct position in the riff.
pub struct PatternStrategy {
    cursor: AtomicUsize,
    profile: OpponentProfile,
}

impl PatternStrategy {
    pub const PATTERN: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Scissors];

    pub fn new() -> Self {
        Self {
            cursor: AtomicUsize::new(0),
            profile: OpponentProfile::new("rex", "Rhythm Rex", BehaviorType::Pattern, Difficulty::Medium)
                .with_description("Repeats a four-move riff. Crack the rhythm to win."),
        }
    }

    /// Number of moves produced so far.
    #[must_use]
    pub fn played(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl Default for PatternStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentStrategy for PatternStrategy {
    fn profile(&self) -> &OpponentProfile {
        &self.profile
    }

    fn next_move(&self, _request: &PlayRequest, _snapshot: &PlayerState) -> Move {
        // usize::MAX + 1 is a multiple of 4, so wrapping keeps the riff aligned.
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        Self::PATTERN[index % Self::PATTERN.len()]
    }
}

// =============================================================================
// Cheater
// =============================================================================

/// Sid: with probability `cheat_chance` plays the counter to the player's
/// submitted move, otherwise a uniform move.
pub struct CheaterStrategy {
    random: Arc<dyn RandomSource>,
    cheat_chance: f64,
    profile: OpponentProfile,
}

impl CheaterStrategy {
    pub const DEFAULT_CHEAT_CHANCE: f64 = 0.65;

    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self::with_chance(random, Self::DEFAULT_CHEAT_CHANCE)
    }

    /// Peek with probability `cheat_chance`, clamped to `[0, 1]`.
    pub fn with_chance(random: Arc<dyn RandomSource>, cheat_chance: f64) -> Self {
        let cheat_chance = cheat_chance.clamp(0.0, 1.0);
        Self {
            random,
            cheat_chance,
            profile: OpponentProfile::new("sid", "Sneaky Sid", BehaviorType::Cheater, Difficulty::Hard)
                .with_description(format!(
                    "Peeks at your move about {:.0}% of the time and counters it.",
                    cheat_chance * 100.0
                )),
        }
    }

    #[must_use]
    pub fn cheat_chance(&self) -> f64 {
        self.cheat_chance
    }
}

impl OpponentStrategy for CheaterStrategy {
    fn profile(&self) -> &OpponentProfile {
        &self.profile
    }

    fn next_move(&self, request: &PlayRequest, _snapshot: &PlayerState) -> Move {
        if self.random.next_f64() >= self.cheat_chance {
            return self.random.next_move();
        }

        match request.submitted_move() {
            Some(player_move) => {
                trace!(%player_move, "sid peeked");
                player_move.counter()
            }
            None => self.random.next_move(),
        }
    }
}

// =============================================================================
// Closed set
// =============================================================================

/// One of the four opponents.
pub enum Strategy {
    Random(RandomStrategy),
    Weighted(WeightedStrategy),
    Pattern(PatternStrategy),
    Cheater(CheaterStrategy),
}

impl Strategy {
    fn inner(&self) -> &dyn OpponentStrategy {
        match self {
            Strategy::Random(s) => s,
            Strategy::Weighted(s) => s,
            Strategy::Pattern(s) => s,
            Strategy::Cheater(s) => s,
        }
    }

    /// The full roster: Marty, Lena, Rex and Sid, sharing one random source.
    pub fn roster(random: Arc<dyn RandomSource>) -> Vec<Strategy> {
        vec![
            Strategy::Random(RandomStrategy::new(Arc::clone(&random))),
            Strategy::Weighted(WeightedStrategy::new(Arc::clone(&random))),
            Strategy::Pattern(PatternStrategy::new()),
            Strategy::Cheater(CheaterStrategy::new(random)),
        ]
    }
}

impl OpponentStrategy for Strategy {
    fn profile(&self) -> &OpponentProfile {
        self.inner().profile()
    }

    fn next_move(&self, request: &PlayRequest, snapshot: &PlayerState) -> Move {
        self.inner().next_move(request, snapshot)
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Strategy").field(&self.profile().id).finish()
    }
}
