use thiserror::Error;

/// Errors surfaced by the strict copy path and config parsing
#[derive(Debug, Error)]
pub enum Osc52Error {
    #[error("Failed to write clipboard sequence: {0}")]
    Write(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Osc52Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
