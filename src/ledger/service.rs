//! Player ledger service.
//!
//! Owns the single mutable `PlayerState` and the round history. Every
//! operation holds one mutex for its whole read or write, so:
//!
//! - snapshots are never torn (counters and opponent stats copied together)
//! - concurrent rounds never act on a stale balance
//!
//! A round is validated before anything is touched, so a rejected round
//! leaves the ledger exactly as it was. Validation includes the payout itself:
//! a win that would overflow the balance or an opponent's net total is refused.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::{
    BetError, GameError, LedgerConfig, Move, PlayRequest, PlayerState, PlayerStats, RoundResult, Winner,
};
use crate::rules::BetValidator;

use super::history::RoundHistory;

struct Ledger {
    state: PlayerState,
    history: RoundHistory,
}

impl Ledger {
    fn fresh(config: &LedgerConfig) -> Self {
        Self {
            state: PlayerState::new(config.starting_coins),
            history: RoundHistory::new(config.history_capacity),
        }
    }
}

/// Concurrency-safe owner of the player ledger.
///
/// ## Example
///
/// ```
/// use rps_wager::core::{LedgerConfig, Move, PlayRequest, Winner};
/// use rps_wager::ledger::PlayerStateService;
///
/// let ledger = PlayerStateService::new(LedgerConfig::default());
///
/// let request = PlayRequest::new("marty", Move::Rock, 10);
/// let round = ledger.apply_round(&request, Move::Scissors, Winner::Player).unwrap();
///
/// assert_eq!(round.coin_delta, 10);
/// assert_eq!(ledger.snapshot().coins, 60);
/// ```
pub struct PlayerStateService {
    config: LedgerConfig,
    validator: BetValidator,
    ledger: Mutex<Ledger>,
}

impl Default for PlayerStateService {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl PlayerStateService {
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        let ledger = Ledger::fresh(&config);
        Self {
            config,
            validator: BetValidator,
            ledger: Mutex::new(ledger),
        }
    }

    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Independent copy of the current ledger.
    #[must_use]
    pub fn snapshot(&self) -> PlayerState {
        self.lock().state.clone()
    }

    /// Snapshot plus recent rounds, oldest first, taken together.
    #[must_use]
    pub fn stats(&self) -> PlayerStats {
        let ledger = self.lock();
        PlayerStats {
            player: ledger.state.clone(),
            recent_rounds: ledger.history.to_vec(),
        }
    }

    /// Settle one round.
    ///
    /// Fails with `InvalidBet` or `InvalidMove` before any field is touched.
    /// `InvalidBet(WouldOverflow)` covers payouts the ledger cannot hold.
    pub fn apply_round(
        &self,
        request: &PlayRequest,
        opponent_move: Move,
        winner: Winner,
    ) -> Result<RoundResult, GameError> {
        let mut ledger = self.lock();

        let player_move = match self.check(&ledger.state, request, winner) {
            Ok(mv) => mv,
            Err(err) => {
                warn!(opponent = %request.opponent_id, bet = request.bet_amount, %err, "round rejected");
                return Err(err);
            }
        };

        let bet = request.bet_amount;
        let coin_delta = winner.coin_delta(bet);
        let now = Utc::now();
        let opponent_id = request.ledger_key().to_string();

        ledger.state.record(winner, coin_delta);
        ledger.state.opponent_entry(&opponent_id).record(winner, bet, now);

        let round = RoundResult {
            player_move,
            opponent_move,
            winner,
            coin_delta,
            timestamp: now,
            opponent_id,
        };
        ledger.history.push(round.clone());

        debug!(
            opponent = %round.opponent_id,
            player_move = %round.player_move,
            opponent_move = %round.opponent_move,
            winner = ?round.winner,
            coin_delta,
            coins = ledger.state.coins,
            "round applied"
        );

        Ok(round)
    }

    /// Restore the starting balance and clear everything else.
    pub fn reset(&self) -> PlayerState {
        let mut ledger = self.lock();
        *ledger = Ledger::fresh(&self.config);
        info!(coins = self.config.starting_coins, "ledger reset");
        ledger.state.clone()
    }

    fn check(&self, state: &PlayerState, request: &PlayRequest, winner: Winner) -> Result<Move, GameError> {
        self.validator.validate(state, request)?;
        let player_move = request.parsed_move()?;

        let amount = request.bet_amount;
        let coin_delta = winner.coin_delta(amount);
        let net = state
            .opponent_stats
            .get(request.ledger_key())
            .map_or(0, |stats| stats.net_coins);

        if state.coins.checked_add(coin_delta).is_none() || net.checked_add(coin_delta).is_none() {
            return Err(BetError::WouldOverflow {
                amount,
                balance: state.coins,
            }
            .into());
        }

        Ok(player_move)
    }

    fn lock(&self) -> MutexGuard<'_, Ledger> {
        // Mutation only starts after validation and cannot panic part-way.
        self.ledger.lock().unwrap_or_else(|poisoned| {
            warn!("ledger lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl std::fmt::Debug for PlayerStateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStateService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
