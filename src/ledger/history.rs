//! Bounded log of recent rounds, oldest first.

use im::Vector;

use crate::core::RoundResult;

/// FIFO of the most recent rounds. Pushing past capacity evicts the oldest.
#[derive(Clone, Debug)]
pub struct RoundHistory {
    rounds: Vector<RoundResult>,
    capacity: usize,
}

impl RoundHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            rounds: Vector::new(),
            capacity,
        }
    }

    pub fn push(&mut self, round: RoundResult) {
        self.rounds.push_back(round);
        while self.rounds.len() > self.capacity {
            self.rounds.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RoundResult> {
        self.rounds.iter()
    }

    /// Copy out, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<RoundResult> {
        self.rounds.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Winner};
    use chrono::Utc;

    fn round(delta: i64) -> RoundResult {
        RoundResult {
            player_move: Move::Rock,
            opponent_move: Move::Scissors,
            winner: Winner::Player,
            coin_delta: delta,
            timestamp: Utc::now(),
            opponent_id: "marty".into(),
        }
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut history = RoundHistory::new(5);
        for i in 1..=3 {
            history.push(round(i));
        }

        let deltas: Vec<_> = history.iter().map(|r| r.coin_delta).collect();
        assert_eq!(deltas, [1, 2, 3]);
    }

    #[test]
    fn test_evicts_oldest_past_capacity() {
        let mut history = RoundHistory::new(3);
        for i in 1..=5 {
            history.push(round(i));
        }

        assert_eq!(history.len(), 3);
        let deltas: Vec<_> = history.to_vec().iter().map(|r| r.coin_delta).collect();
        assert_eq!(deltas, [3, 4, 5]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = RoundHistory::new(0);
        history.push(round(1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = RoundHistory::new(2);
        history.push(round(1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 2);
    }
}
