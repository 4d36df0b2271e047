//! AI opponents: profiles, move policies, and the registry that looks them up.

pub mod profile;
pub mod strategy;
pub mod registry;

pub use profile::{BehaviorType, Difficulty, OpponentProfile};
pub use strategy::{
    CheaterStrategy, OpponentStrategy, PatternStrategy, RandomStrategy, Strategy, WeightedStrategy,
};
pub use registry::OpponentRegistry;
