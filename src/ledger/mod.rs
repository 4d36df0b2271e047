//! The authoritative player ledger and its recent-round history.

pub mod history;
pub mod service;

pub use history::RoundHistory;
pub use service::PlayerStateService;
