//! Save/load persistence for the portfolio records
//!
//! Features:
//! - Pluggable key-value backend (LocalStorage on web, in-memory elsewhere)
//! - JSON records under fixed keys
//! - Self-healing: absent or corrupt records are replaced by defaults

pub mod state;
pub mod store;

pub use state::{PortfolioState, PortfolioStore};
pub use store::{KeyValueStore, MemoryStore};
