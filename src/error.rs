//! Error types for hangman-core

use thiserror::Error;

/// Errors that can occur in the game core
///
/// All errors are local to a single request; none is fatal to the
/// process. A concluded game or a repeated letter is not an error —
/// both are distinct statuses on [`crate::types::GuessOutcome`].
#[derive(Debug, Error)]
pub enum GameError {
    /// Malformed guess letter, custom word, or session id
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown, expired, or evicted session id
    #[error("Session not found: {0}")]
    NotFound(String),

    /// Identifier space exhausted after bounded retries
    ///
    /// The caller should retry the whole start operation later.
    #[error("Session capacity: {0}")]
    Capacity(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
