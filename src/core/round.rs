//! Round request and result types exchanged with callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::moves::{Move, Winner};
use super::player::PlayerState;

/// Opponent id recorded when a request arrives without one.
pub const UNKNOWN_OPPONENT: &str = "unknown";

/// A player's submission for one round.
///
/// `player_move` stays a raw wire code until the round is validated, so a
/// request carrying an unrecognized move can still be represented and rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    pub opponent_id: String,
    pub player_move: i32,
    pub bet_amount: i64,
}

impl PlayRequest {
    #[must_use]
    pub fn new(opponent_id: impl Into<String>, player_move: Move, bet_amount: i64) -> Self {
        Self {
            opponent_id: opponent_id.into(),
            player_move: player_move.code(),
            bet_amount,
        }
    }

    /// Decoded move, if the code is recognized.
    #[must_use]
    pub fn submitted_move(&self) -> Option<Move> {
        Move::from_code(self.player_move)
    }

    /// Decoded move, failing with `InvalidMove` otherwise.
    pub fn parsed_move(&self) -> Result<Move, GameError> {
        Move::try_from(self.player_move)
    }

    /// Opponent id to book the round under, or [`UNKNOWN_OPPONENT`] when blank.
    #[must_use]
    pub fn ledger_key(&self) -> &str {
        if self.opponent_id.trim().is_empty() {
            UNKNOWN_OPPONENT
        } else {
            &self.opponent_id
        }
    }
}

/// Outcome of one applied round. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub player_move: Move,
    pub opponent_move: Move,
    pub winner: Winner,

    /// `+bet` on a player win, `-bet` on a loss, `0` on a tie.
    pub coin_delta: i64,

    pub timestamp: DateTime<Utc>,
    pub opponent_id: String,
}

/// Result of `GameService::play_round`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub round: RoundResult,
    pub player: PlayerState,
}

/// Ledger snapshot plus recent rounds, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player: PlayerState,
    pub recent_rounds: Vec<RoundResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_moves() {
        let request = PlayRequest::new("marty", Move::Scissors, 5);
        assert_eq!(request.player_move, 2);
        assert_eq!(request.submitted_move(), Some(Move::Scissors));
        assert_eq!(request.parsed_move(), Ok(Move::Scissors));

        let bogus = PlayRequest {
            player_move: 4,
            ..request
        };
        assert_eq!(bogus.submitted_move(), None);
        assert_eq!(bogus.parsed_move(), Err(GameError::InvalidMove { value: 4 }));
    }

    #[test]
    fn test_ledger_key_falls_back_for_blank_ids() {
        assert_eq!(PlayRequest::new("lena", Move::Rock, 1).ledger_key(), "lena");
        assert_eq!(PlayRequest::new("", Move::Rock, 1).ledger_key(), UNKNOWN_OPPONENT);
        assert_eq!(PlayRequest::new("   ", Move::Rock, 1).ledger_key(), UNKNOWN_OPPONENT);
    }

    #[test]
    fn test_request_wire_format() {
        let request: PlayRequest =
            serde_json::from_str(r#"{"opponentId":"rex","playerMove":1,"betAmount":10}"#).unwrap();
        assert_eq!(request, PlayRequest::new("rex", Move::Paper, 10));
    }

    #[test]
    fn test_round_wire_format() {
        let round = RoundResult {
            player_move: Move::Rock,
            opponent_move: Move::Paper,
            winner: Winner::Opponent,
            coin_delta: -5,
            timestamp: Utc::now(),
            opponent_id: "lena".into(),
        };

        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["playerMove"], 0);
        assert_eq!(json["opponentMove"], 1);
        assert_eq!(json["winner"], "Opponent");
        assert_eq!(json["coinDelta"], -5);

        let back: RoundResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, round);
    }
}
