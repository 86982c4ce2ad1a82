//! Request handlers

pub mod api;

pub use api::{get_inventory, health_check};
