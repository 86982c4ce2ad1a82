//! Shared server state
//!
//! Read-only after construction; handlers clone the `Arc` cheaply.

use std::sync::Arc;
use std::time::Instant;

use crate::core::ScenarioCatalog;

/// State handed to every handler via `axum::extract::State`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ScenarioCatalog>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(ScenarioCatalog::builtin()),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
