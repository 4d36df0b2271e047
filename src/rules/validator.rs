//! Wager guard, run before any ledger mutation.

use crate::core::{BetError, PlayRequest, PlayerState};

/// Checks a proposed bet against the current balance.
#[derive(Clone, Copy, Debug, Default)]
pub struct BetValidator;

impl BetValidator {
    /// Accepts any bet in `1..=state.coins`.
    pub fn validate(&self, state: &PlayerState, request: &PlayRequest) -> Result<(), BetError> {
        let amount = request.bet_amount;

        if amount <= 0 {
            return Err(BetError::NotPositive { amount });
        }
        if amount > state.coins {
            return Err(BetError::ExceedsBalance {
                amount,
                balance: state.coins,
            });
        }

        Ok(())
    }
}
