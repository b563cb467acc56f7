//! Core session and response types for hangman-core
//!
//! All externally visible response types use camelCase JSON
//! serialization for wire compatibility.

use serde::{Deserialize, Serialize};

/// A single game session
///
/// Owned by the [`crate::store::SessionStore`]; mutated only through
/// the guess path. `won` is meaningful only once `game_over` is true,
/// and `game_over` never resets.
#[derive(Debug, Clone)]
pub struct Session {
    /// The word to guess — uppercase ASCII letters only
    pub secret: String,

    /// Letters tried so far, insertion order kept for display
    pub guessed: Vec<char>,

    /// Remaining wrong guesses, floor 0
    pub chances: u32,

    /// Whether the game has concluded
    pub game_over: bool,

    /// Whether the game was won (only when `game_over`)
    pub won: bool,

    /// Unix timestamp in milliseconds at creation
    pub created_at: i64,

    /// Unix timestamp in milliseconds of the last read or write
    pub last_activity: i64,
}

impl Session {
    /// Create a new active session for the given secret
    pub fn new(secret: impl Into<String>, chances: u32) -> Self {
        let now = now_millis();
        Self {
            secret: secret.into(),
            guessed: Vec::new(),
            chances,
            game_over: false,
            won: false,
            created_at: now,
            last_activity: now,
        }
    }

    /// Update last activity to the current time
    pub fn touch(&mut self) {
        self.last_activity = now_millis();
    }

    /// Whether this letter has already been tried
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }
}

/// Outcome status of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessStatus {
    /// The letter was applied to the session
    Applied,
    /// The letter was tried before — no state change, no evaluation
    Repeat,
    /// The game had already concluded — no state change
    AlreadyOver,
}

/// Response to a successful start operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedGame {
    /// Freshly allocated 6-character session identifier
    pub session_id: String,

    /// Length of the secret word
    pub word_length: usize,

    /// Initial (fully hidden) display projection
    pub display_word: Vec<char>,

    /// Starting chances
    pub chances: u32,

    /// Letters guessed so far — always empty at start
    pub guessed: Vec<char>,

    pub game_over: bool,
    pub won: bool,
}

/// Result of applying one guess
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    /// What happened to this guess
    pub status: GuessStatus,

    /// Display projection after the guess
    pub display_word: Vec<char>,

    /// Remaining chances after the guess
    pub chances: u32,

    pub game_over: bool,
    pub won: bool,

    /// Whether this particular letter occurs in the secret
    ///
    /// `None` for repeat and already-over guesses, which are not
    /// evaluated against the secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_guess: Option<bool>,

    /// The secret word — present only once the game has concluded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_word: Option<String>,
}

/// Read-only view of a session's current state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub display_word: Vec<char>,
    pub chances: u32,
    pub game_over: bool,
    pub won: bool,

    /// Letters tried so far, in the order they were guessed
    pub guessed: Vec<char>,

    /// The secret word — present only once the game has concluded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_word: Option<String>,
}

/// Current time in Unix milliseconds
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
