//! Error types for pointscape

use thiserror::Error;

/// Main error type for pointscape operations.
///
/// `InvalidConfig` covers camera and session configuration; `Generation`
/// covers generator parameters outside their domain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

/// Result type alias for pointscape operations
pub type Result<T> = std::result::Result<T, Error>;
