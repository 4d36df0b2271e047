//! Winner resolution over the Rock → Scissors → Paper → Rock cycle.

use crate::core::{Move, Winner};

/// Maps a pair of moves to the round winner.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundResolver;

impl RoundResolver {
    /// Equal moves tie; otherwise the move on the "beats" side wins.
    #[must_use]
    pub fn resolve(&self, player_move: Move, opponent_move: Move) -> Winner {
        if player_move == opponent_move {
            return Winner::Tie;
        }

        match (player_move, opponent_move) {
            (Move::Rock, Move::Scissors) | (Move::Paper, Move::Rock) | (Move::Scissors, Move::Paper) => {
                Winner::Player
            }
            _ => Winner::Opponent,
        }
    }
}
