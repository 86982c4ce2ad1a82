//! Synthetic cloud-inventory demo service
//!
//! Serves fabricated inventory figures and canned cost-saving recommendations
//! for three preset scenarios. There is no real cloud access anywhere in this
//! crate; every number is table-driven with per-request jitter.

pub mod core;
pub mod error;
pub mod logging;
pub mod server;
pub mod state;
pub mod types;
pub mod web;

// Re-export main types
pub use crate::core::{Scenario, ScenarioCatalog, ScenarioName};
pub use error::{ServerError, ServerResult};
pub use server::InventoryServer;
pub use state::AppState;
pub use types::{InventoryResponse, Service, SYNTHETIC_NOTE};
