//! Error types for round validation and opponent lookup.
//!
//! Every failure is detected synchronously, before any ledger mutation, and is
//! reported with a human-readable reason. Nothing here is retryable.

use thiserror::Error;

/// A wager rejected against the current balance.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("bet amount must be greater than zero (got {amount})")]
    NotPositive { amount: i64 },

    #[error("bet amount cannot exceed the current coin balance (bet {amount}, balance {balance})")]
    ExceedsBalance { amount: i64, balance: i64 },

    #[error("bet amount would overflow the coin ledger (bet {amount}, balance {balance})")]
    WouldOverflow { amount: i64, balance: i64 },
}

/// Broad category of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request: blank opponent, unknown move, bad wager.
    Validation,
    /// The request named an opponent that is not registered.
    Lookup,
}

/// Errors surfaced by the game engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("opponent id is required")]
    MissingOpponent,

    #[error("invalid player move: {value}")]
    InvalidMove { value: i32 },

    #[error(transparent)]
    InvalidBet(#[from] BetError),

    #[error("opponent '{id}' is not available")]
    OpponentNotFound { id: String },

    #[error("opponent '{id}' is registered more than once")]
    DuplicateOpponent { id: String },
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::OpponentNotFound { .. } => ErrorKind::Lookup,
            GameError::MissingOpponent
            | GameError::InvalidMove { .. }
            | GameError::InvalidBet(_)
            | GameError::DuplicateOpponent { .. } => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_messages() {
        let zero = BetError::NotPositive { amount: 0 };
        assert!(zero.to_string().starts_with("bet amount must be greater than zero"));

        let over = BetError::ExceedsBalance { amount: 50, balance: 25 };
        assert!(over.to_string().starts_with("bet amount cannot exceed the current coin balance"));

        let huge = BetError::WouldOverflow { amount: i64::MAX, balance: i64::MAX };
        assert!(huge.to_string().starts_with("bet amount would overflow the coin ledger"));
        assert_eq!(GameError::from(huge).kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_bet_is_transparent() {
        let err: GameError = BetError::NotPositive { amount: -3 }.into();
        assert_eq!(err.to_string(), BetError::NotPositive { amount: -3 }.to_string());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(GameError::MissingOpponent.kind(), ErrorKind::Validation);
        assert_eq!(GameError::InvalidMove { value: 9 }.kind(), ErrorKind::Validation);
        assert_eq!(
            GameError::OpponentNotFound { id: "zed".into() }.kind(),
            ErrorKind::Lookup
        );
        assert_eq!(GameError::OpponentNotFound { id: "zed".into() }.to_string(), "opponent 'zed' is not available");
    }
}
