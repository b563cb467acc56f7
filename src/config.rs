//! Session store configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a [`crate::store::SessionStore`]
///
/// Every field has a documented default, so a partial configuration
/// deserializes cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of live sessions before capacity eviction (default 1000)
    pub max_sessions: usize,

    /// Idle age in seconds after which a session is evicted (default 3600)
    pub session_ttl_seconds: u64,

    /// Collision retry bound for session id allocation (default 10)
    pub max_id_attempts: u32,

    /// Starting chances for a new game (default 7)
    pub initial_chances: u32,

    /// Minimum length of a user-supplied secret (default 3)
    pub min_word_len: usize,

    /// Maximum length of a user-supplied secret (default 20)
    pub max_word_len: usize,

    /// Optional word file overriding the built-in list, one word per line
    pub word_file: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            session_ttl_seconds: 3600,
            max_id_attempts: 10,
            initial_chances: 7,
            min_word_len: 3,
            max_word_len: 20,
            word_file: None,
        }
    }
}

impl StoreConfig {
    /// Session TTL in milliseconds
    pub fn ttl_millis(&self) -> i64 {
        self.session_ttl_seconds as i64 * 1000
    }
}
