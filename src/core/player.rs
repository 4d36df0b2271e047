//! Player ledger records.
//!
//! ## PlayerState
//!
//! Coin balance, outcome counters, streaks and per-opponent history.
//! Backed by `im` persistent maps so a snapshot is an O(1) clone that never
//! aliases the live ledger.
//!
//! ## OpponentStats
//!
//! Per-opponent record, counted from the opponent's side of the table.

use chrono::{DateTime, Utc};
use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use super::config::DEFAULT_STARTING_COINS;
use super::moves::Winner;

/// Snapshot of the player's ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub coins: i64,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,

    /// Positive: consecutive wins. Negative: consecutive losses. Zero after a tie.
    pub current_streak: i32,

    /// Highest `current_streak` ever observed.
    pub best_streak: i32,

    /// Keyed by opponent id.
    pub opponent_stats: ImHashMap<String, OpponentStats>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_COINS)
    }
}

impl PlayerState {
    /// A fresh ledger holding `coins`.
    #[must_use]
    pub fn new(coins: i64) -> Self {
        Self {
            coins,
            wins: 0,
            losses: 0,
            ties: 0,
            current_streak: 0,
            best_streak: 0,
            opponent_stats: ImHashMap::new(),
        }
    }

    /// Total rounds recorded.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Record the player-side outcome of a round: counters and streaks.
    pub(crate) fn record(&mut self, winner: Winner, coin_delta: i64) {
        self.coins += coin_delta;

        match winner {
            Winner::Player => {
                self.wins += 1;
                self.current_streak = if self.current_streak >= 0 {
                    self.current_streak + 1
                } else {
                    1
                };
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Winner::Opponent => {
                self.losses += 1;
                self.current_streak = if self.current_streak <= 0 {
                    self.current_streak - 1
                } else {
                    -1
                };
            }
            Winner::Tie => {
                self.ties += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Look up or lazily create the record for `opponent_id`.
    pub(crate) fn opponent_entry(&mut self, opponent_id: &str) -> &mut OpponentStats {
        self.opponent_stats
            .entry(opponent_id.to_string())
            .or_insert_with(|| OpponentStats::new(opponent_id))
    }
}

/// One opponent's record against the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentStats {
    pub opponent_id: String,

    /// Rounds the opponent won.
    pub wins: u32,

    /// Rounds the opponent lost.
    pub losses: u32,

    pub ties: u32,

    /// Running total of the wagers settled in rounds against this opponent:
    /// `+bet` when the player won, `-bet` when the opponent won.
    pub net_coins: i64,

    pub last_played: Option<DateTime<Utc>>,
}

impl OpponentStats {
    #[must_use]
    pub fn new(opponent_id: impl Into<String>) -> Self {
        Self {
            opponent_id: opponent_id.into(),
            wins: 0,
            losses: 0,
            ties: 0,
            net_coins: 0,
            last_played: None,
        }
    }

    /// Total rounds played against this opponent.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Record a round, flipping `winner` to the opponent's perspective.
    pub(crate) fn record(&mut self, winner: Winner, bet: i64, at: DateTime<Utc>) {
        match winner {
            Winner::Player => {
                self.losses += 1;
                self.net_coins += bet;
            }
            Winner::Opponent => {
                self.wins += 1;
                self.net_coins -= bet;
            }
            Winner::Tie => self.ties += 1,
        }
        self.last_played = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = PlayerState::default();
        assert_eq!(state.coins, 50);
        assert_eq!(state.rounds_played(), 0);
        assert_eq!(state.current_streak, 0);
        assert!(state.opponent_stats.is_empty());
    }

    #[test]
    fn test_win_streak_grows_and_tracks_best() {
        let mut state = PlayerState::default();
        state.record(Winner::Player, 5);
        state.record(Winner::Player, 5);
        state.record(Winner::Player, 5);

        assert_eq!(state.coins, 65);
        assert_eq!(state.current_streak, 3);
        assert_eq!(state.best_streak, 3);
    }

    #[test]
    fn test_loss_flips_positive_streak_to_minus_one() {
        let mut state = PlayerState::default();
        state.record(Winner::Player, 5);
        state.record(Winner::Player, 5);
        state.record(Winner::Opponent, 5);

        assert_eq!(state.current_streak, -1);
        assert_eq!(state.best_streak, 2);

        state.record(Winner::Opponent, 5);
        assert_eq!(state.current_streak, -2);
    }

    #[test]
    fn test_win_after_losses_restarts_at_one() {
        let mut state = PlayerState::default();
        state.record(Winner::Opponent, 1);
        state.record(Winner::Opponent, 1);
        state.record(Winner::Player, 1);

        assert_eq!(state.current_streak, 1);
        assert_eq!(state.best_streak, 1);
    }

    #[test]
    fn test_tie_zeroes_streak() {
        let mut state = PlayerState::default();
        state.record(Winner::Player, 3);
        state.record(Winner::Tie, 0);

        assert_eq!(state.current_streak, 0);
        assert_eq!(state.best_streak, 1);
        assert_eq!(state.ties, 1);
        assert_eq!(state.coins, 53);
    }

    #[test]
    fn test_opponent_entry_is_lazy_and_unique() {
        let mut state = PlayerState::default();
        state.opponent_entry("marty").wins += 1;
        state.opponent_entry("marty").wins += 1;

        assert_eq!(state.opponent_stats.len(), 1);
        assert_eq!(state.opponent_stats["marty"].wins, 2);
        assert_eq!(state.opponent_stats["marty"].opponent_id, "marty");
    }

    #[test]
    fn test_opponent_perspective() {
        let now = Utc::now();
        let mut stats = OpponentStats::new("sid");

        stats.record(Winner::Player, 10, now);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.net_coins, 10);

        stats.record(Winner::Opponent, 4, now);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.net_coins, 6);

        stats.record(Winner::Tie, 4, now);
        assert_eq!(stats.ties, 1);
        assert_eq!(stats.net_coins, 6);
        assert_eq!(stats.rounds(), 3);
        assert_eq!(stats.last_played, Some(now));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = PlayerState::default();
        state.opponent_entry("rex").ties = 1;

        let mut copy = state.clone();
        copy.coins = 0;
        copy.opponent_entry("rex").ties = 99;
        copy.opponent_entry("lena");

        assert_eq!(state.coins, 50);
        assert_eq!(state.opponent_stats["rex"].ties, 1);
        assert_eq!(state.opponent_stats.len(), 1);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let mut state = PlayerState::default();
        state.opponent_entry("lena").net_coins = -5;

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["coins"], 50);
        assert_eq!(json["currentStreak"], 0);
        assert_eq!(json["opponentStats"]["lena"]["netCoins"], -5);

        let back: PlayerState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
