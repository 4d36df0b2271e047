//! Static opponent metadata.

use serde::{Deserialize, Serialize};

/// Behavioral family of an opponent's move policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorType {
    Random,
    Weighted,
    Pattern,
    Cheater,
}

/// How hard an opponent is to beat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Descriptive profile of an opponent. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentProfile {
    /// Lookup key, matched case-insensitively by the registry.
    pub id: String,

    /// Display name; the registry lists profiles sorted by it.
    pub name: String,

    pub behavior_type: BehaviorType,
    pub difficulty: Difficulty,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OpponentProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        behavior_type: BehaviorType,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            behavior_type,
            difficulty,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let profile = OpponentProfile::new("rex", "Rhythm Rex", BehaviorType::Pattern, Difficulty::Medium)
            .with_description("Repeats a riff.");

        assert_eq!(profile.id, "rex");
        assert_eq!(profile.description.as_deref(), Some("Repeats a riff."));
    }

    #[test]
    fn test_wire_format() {
        let profile = OpponentProfile::new("sid", "Sneaky Sid", BehaviorType::Cheater, Difficulty::Hard);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["behaviorType"], "Cheater");
        assert_eq!(json["difficulty"], "Hard");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }
}
