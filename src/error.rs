//! Service-specific error types
//!
//! The inventory operation itself is total; only startup and transport
//! setup can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
