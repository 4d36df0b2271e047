//! Round orchestration over the registry and ledger.

pub mod service;

pub use service::GameService;
