//! Round orchestration.
//!
//! `play_round` runs: request checks → pre-round snapshot → opponent lookup →
//! opponent move → winner → ledger update. The opponent sees the player's
//! submitted move and the snapshot from before this round, never the outcome.

use std::sync::Arc;

use tracing::warn;

use crate::core::{
    GameConfig, GameError, PlayRequest, PlayResponse, PlayerState, PlayerStats, RandomSource, SeededRandom,
};
use crate::ledger::PlayerStateService;
use crate::opponents::{OpponentProfile, OpponentRegistry, OpponentStrategy};
use crate::rules::RoundResolver;

/// Entry point for callers: opponents, rounds, stats and reset.
///
/// ## Example
///
/// ```
/// use rps_wager::core::{GameConfig, Move, PlayRequest};
/// use rps_wager::game::GameService;
///
/// let game = GameService::from_config(GameConfig::default()).unwrap();
///
/// // Rex always opens with Rock.
/// let response = game.play_round(&PlayRequest::new("rex", Move::Paper, 10)).unwrap();
/// assert_eq!(response.player.coins, 60);
///
/// assert_eq!(game.reset().coins, 50);
/// ```
#[derive(Debug)]
pub struct GameService {
    registry: Arc<OpponentRegistry>,
    ledger: Arc<PlayerStateService>,
    resolver: RoundResolver,
}

impl GameService {
    /// Wire explicit collaborators.
    pub fn new(registry: Arc<OpponentRegistry>, ledger: Arc<PlayerStateService>) -> Self {
        Self {
            registry,
            ledger,
            resolver: RoundResolver,
        }
    }

    /// Standard roster sharing one source seeded from `config.seed`.
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        let random: Arc<dyn RandomSource> = Arc::new(SeededRandom::new(config.seed));
        let registry = OpponentRegistry::standard(random)?;

        Ok(Self::new(
            Arc::new(registry),
            Arc::new(PlayerStateService::new(config.ledger)),
        ))
    }

    #[must_use]
    pub fn registry(&self) -> &OpponentRegistry {
        &self.registry
    }

    #[must_use]
    pub fn ledger(&self) -> &PlayerStateService {
        &self.ledger
    }

    /// All opponent profiles, sorted by display name.
    #[must_use]
    pub fn opponents(&self) -> &[OpponentProfile] {
        self.registry.profiles()
    }

    /// One opponent's profile.
    pub fn opponent(&self, id: &str) -> Result<&OpponentProfile, GameError> {
        self.registry.profile(id)
    }

    /// Resolve and settle one round.
    pub fn play_round(&self, request: &PlayRequest) -> Result<PlayResponse, GameError> {
        let result = self.try_play(request);
        if let Err(err) = &result {
            warn!(opponent = %request.opponent_id, kind = ?err.kind(), %err, "play rejected");
        }
        result
    }

    fn try_play(&self, request: &PlayRequest) -> Result<PlayResponse, GameError> {
        if request.opponent_id.trim().is_empty() {
            return Err(GameError::MissingOpponent);
        }
        let player_move = request.parsed_move()?;

        let before = self.ledger.snapshot();
        let strategy = self.registry.get(&request.opponent_id)?;
        let opponent_move = strategy.next_move(request, &before);
        let winner = self.resolver.resolve(player_move, opponent_move);

        let round = self.ledger.apply_round(request, opponent_move, winner)?;
        let player = self.ledger.snapshot();

        Ok(PlayResponse { round, player })
    }

    #[must_use]
    pub fn stats(&self) -> PlayerStats {
        self.ledger.stats()
    }

    pub fn reset(&self) -> PlayerState {
        self.ledger.reset()
    }
}
