//! Core business logic modules
//!
//! Pure computation with no I/O dependencies.

pub mod estimator;
pub mod scenario;

// Re-export commonly used types
pub use scenario::{Scenario, ScenarioCatalog, ScenarioName};
