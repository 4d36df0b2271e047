//! Opponent registry for strategy lookup.
//!
//! Built once from the full roster; immutable afterwards. Lookup ignores case.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{GameError, RandomSource};

use super::profile::OpponentProfile;
use super::strategy::{OpponentStrategy, Strategy};

/// Registry of opponents keyed by profile id.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use rps_wager::core::SeededRandom;
/// use rps_wager::opponents::{OpponentRegistry, OpponentStrategy};
///
/// let registry = OpponentRegistry::standard(Arc::new(SeededRandom::new(42))).unwrap();
///
/// let sid = registry.get("SID").unwrap();
/// assert_eq!(sid.profile().name, "Sneaky Sid");
///
/// let names: Vec<_> = registry.profiles().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Lucky Lena", "Marty the Maverick", "Rhythm Rex", "Sneaky Sid"]);
/// ```
#[derive(Debug)]
pub struct OpponentRegistry {
    strategies: FxHashMap<String, Strategy>,
    profiles: Vec<OpponentProfile>,
}

impl OpponentRegistry {
    /// Build from a set of strategies.
    ///
    /// Fails with `DuplicateOpponent` if two ids collide ignoring case.
    pub fn new(strategies: impl IntoIterator<Item = Strategy>) -> Result<Self, GameError> {
        let mut map: FxHashMap<String, Strategy> = FxHashMap::default();

        for strategy in strategies {
            let key = normalize(&strategy.profile().id);
            if map.contains_key(&key) {
                return Err(GameError::DuplicateOpponent {
                    id: strategy.profile().id.clone(),
                });
            }
            map.insert(key, strategy);
        }

        let mut profiles: Vec<_> = map.values().map(|s| s.profile().clone()).collect();
        profiles.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            strategies: map,
            profiles,
        })
    }

    /// Registry holding the standard four-opponent roster.
    pub fn standard(random: Arc<dyn RandomSource>) -> Result<Self, GameError> {
        Self::new(Strategy::roster(random))
    }

    /// All profiles, sorted by display name.
    #[must_use]
    pub fn profiles(&self) -> &[OpponentProfile] {
        &self.profiles
    }

    /// Look up a strategy.
    ///
    /// Fails with `OpponentNotFound` when `id` is blank or unmapped.
    pub fn get(&self, id: &str) -> Result<&Strategy, GameError> {
        if id.trim().is_empty() {
            return Err(GameError::OpponentNotFound { id: id.to_string() });
        }

        self.strategies
            .get(&normalize(id))
            .ok_or_else(|| GameError::OpponentNotFound { id: id.to_string() })
    }

    /// Look up a profile.
    pub fn profile(&self, id: &str) -> Result<&OpponentProfile, GameError> {
        self.get(id).map(|s| s.profile())
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

fn normalize(id: &str) -> String {
    id.to_lowercase()
}
