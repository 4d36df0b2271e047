//! Move domain and round outcomes.
//!
//! ## Move
//!
//! Exactly three values, cyclically ordered: Rock beats Scissors, Paper beats
//! Rock, Scissors beats Paper. On the wire a move is the integer code
//! `0 = Rock`, `1 = Paper`, `2 = Scissors`; any other integer is rejected.
//!
//! ## Winner
//!
//! Outcome of a single round from the table's point of view.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A rock-paper-scissors move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in wire-code order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Decode a wire code, returning `None` for anything outside `0..3`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Move::Rock),
            1 => Some(Move::Paper),
            2 => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Wire code of this move.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The move this one defeats.
    #[must_use]
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    ///
    /// ```
    /// use rps_wager::core::Move;
    ///
    /// assert_eq!(Move::Rock.counter(), Move::Paper);
    /// assert_eq!(Move::Rock.counter().beats(), Move::Rock);
    /// ```
    #[must_use]
    pub const fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// The two moves other than this one, in wire-code order.
    #[must_use]
    pub const fn others(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Paper, Move::Scissors],
            Move::Paper => [Move::Rock, Move::Scissors],
            Move::Scissors => [Move::Rock, Move::Paper],
        }
    }
}

impl TryFrom<i32> for Move {
    type Error = GameError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Move::from_code(value).ok_or(GameError::InvalidMove { value })
    }
}

impl From<Move> for i32 {
    fn from(mv: Move) -> Self {
        mv.code()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Who took the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}

impl Winner {
    /// Signed coin movement for the player given the wager.
    #[must_use]
    pub const fn coin_delta(self, bet: i64) -> i64 {
        match self {
            Winner::Player => bet,
            Winner::Opponent => -bet,
            Winner::Tie => 0,
        }
    }
}
