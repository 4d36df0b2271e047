//! Round rules: who wins, and whether a wager may be placed.
//!
//! Both are pure and hold no state.

pub mod resolver;
pub mod validator;

pub use resolver::RoundResolver;
pub use validator::BetValidator;
