//! In-memory session registry
//!
//! `SessionStore` owns the mapping from session id to [`Session`] and
//! is the sole authority on session existence and expiry. Every
//! operation runs under one exclusive lock over the whole map, so no
//! two operations observe an inconsistent intermediate state. That
//! coarse lock trades throughput for simplicity, which holds up fine
//! for the expected working set (≤1000 sessions, sub-millisecond
//! operations); sharding the lock by session id is the scale-up path
//! if contention ever becomes measurable.

use crate::config::StoreConfig;
use crate::engine;
use crate::error::{GameError, Result};
use crate::types::{now_millis, GameView, GuessOutcome, Session, StartedGame};
use crate::words::WordList;
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Alphabet for session identifiers: 26 uppercase letters + 10 digits
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a session identifier
const ID_LEN: usize = 6;

/// Concurrency-safe registry of game sessions
pub struct SessionStore {
    config: StoreConfig,
    words: WordList,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    /// Create a store from a configuration, resolving the word source
    ///
    /// Fails with `Config` if a configured word file exists but is
    /// unreadable or empty.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let words = WordList::resolve(config.word_file.as_deref())?;
        Ok(Self {
            config,
            words,
            sessions: Mutex::new(HashMap::new()),
        })
    }

    /// The configuration this store was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Start a new game
    ///
    /// Uses the supplied custom word (validated and uppercased) or
    /// draws one from the resolved word list. When the store is at or
    /// above capacity, an eviction pass runs before the new session is
    /// allocated.
    pub async fn start_game(&self, custom_secret: Option<&str>) -> Result<StartedGame> {
        let secret = match custom_secret {
            Some(word) => engine::validate_custom_secret(
                word,
                self.config.min_word_len,
                self.config.max_word_len,
            )?,
            None => self.words.choose().to_string(),
        };

        let mut sessions = self.sessions.lock().await;

        if sessions.len() >= self.config.max_sessions {
            Self::evict_expired_in(&mut sessions, now_millis(), self.config.ttl_millis());
            if sessions.len() >= self.config.max_sessions {
                Self::trim_oldest(&mut sessions, self.config.max_sessions * 9 / 10);
            }
        }

        let id = Self::allocate_id(&sessions, self.config.max_id_attempts)?;
        let session = Session::new(secret, self.config.initial_chances);

        let started = StartedGame {
            session_id: id.clone(),
            word_length: session.secret.chars().count(),
            display_word: engine::project(&session),
            chances: session.chances,
            guessed: Vec::new(),
            game_over: false,
            won: false,
        };

        sessions.insert(id.clone(), session);

        tracing::info!(session_id = %id, sessions = sessions.len(), "Session created");

        Ok(started)
    }

    /// Apply a guess to a session
    ///
    /// Validates the letter, touches the session's activity timestamp,
    /// and runs the engine transition under the store lock. Fails with
    /// `NotFound` when the id is unknown or was evicted.
    pub async fn guess(&self, session_id: &str, input: &str) -> Result<GuessOutcome> {
        Self::validate_id(session_id)?;
        let letter = engine::validate_letter(input)?;

        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| GameError::NotFound(format!("Unknown session: {}", session_id)))?;

        session.touch();
        let outcome = engine::apply_guess(session, letter);

        if outcome.game_over {
            tracing::debug!(session_id = %session_id, won = outcome.won, "Game concluded");
        }

        Ok(outcome)
    }

    /// Current view of a session, touching its activity timestamp
    pub async fn state(&self, session_id: &str) -> Result<GameView> {
        Self::validate_id(session_id)?;

        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| GameError::NotFound(format!("Unknown session: {}", session_id)))?;

        session.touch();

        Ok(GameView {
            display_word: engine::project(session),
            chances: session.chances,
            game_over: session.game_over,
            won: session.won,
            guessed: session.guessed.clone(),
            secret_word: session.game_over.then(|| session.secret.clone()),
        })
    }

    /// Remove every session idle longer than the configured TTL
    ///
    /// Returns the number of sessions evicted.
    pub async fn evict_expired(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        Self::evict_expired_in(&mut sessions, now_millis(), self.config.ttl_millis())
    }

    /// Drop least-recently-active sessions until the store is within
    /// 90% of its configured maximum
    ///
    /// No-op unless the store size exceeds the maximum. Ties in
    /// `last_activity` break in arbitrary order. Returns the number
    /// of sessions evicted.
    pub async fn evict_to_capacity(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        if sessions.len() <= self.config.max_sessions {
            return 0;
        }
        Self::trim_oldest(&mut sessions, self.config.max_sessions * 9 / 10)
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    fn validate_id(session_id: &str) -> Result<()> {
        let well_formed = session_id.len() == ID_LEN
            && session_id.bytes().all(|b| ID_ALPHABET.contains(&b));
        if well_formed {
            Ok(())
        } else {
            Err(GameError::InvalidInput(format!(
                "Malformed session id: {:?}",
                session_id
            )))
        }
    }

    fn allocate_id(sessions: &HashMap<String, Session>, max_attempts: u32) -> Result<String> {
        let mut rng = rand::thread_rng();
        for _ in 0..max_attempts {
            let id: String = (0..ID_LEN)
                .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
                .collect();
            if !sessions.contains_key(&id) {
                return Ok(id);
            }
        }
        Err(GameError::Capacity(format!(
            "No free session id after {} attempts, retry later",
            max_attempts
        )))
    }

    fn evict_expired_in(sessions: &mut HashMap<String, Session>, now: i64, ttl_ms: i64) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_activity <= ttl_ms);

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Expired sessions evicted");
        }
        evicted
    }

    fn trim_oldest(sessions: &mut HashMap<String, Session>, target: usize) -> usize {
        let mut by_age: Vec<(String, i64)> = sessions
            .iter()
            .map(|(id, session)| (id.clone(), session.last_activity))
            .collect();
        by_age.sort_by_key(|(_, last_activity)| *last_activity);

        let mut evicted = 0;
        for (id, _) in by_age {
            if sessions.len() <= target {
                break;
            }
            sessions.remove(&id);
            evicted += 1;
        }

        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Capacity eviction");
        }
        evicted
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            config: StoreConfig::default(),
            words: WordList::builtin(),
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_game_allocates_well_formed_id() {
        let store = SessionStore::default();
        let game = store.start_game(None).await.unwrap();

        assert_eq!(game.session_id.len(), ID_LEN);
        for c in game.session_id.bytes() {
            assert!(ID_ALPHABET.contains(&c));
        }
        assert_eq!(game.chances, 7);
        assert!(game.guessed.is_empty());
        assert!(!game.game_over);
        assert_eq!(game.display_word, vec!['_'; game.word_length]);
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_many_sessions() {
        let store = SessionStore::default();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..1000 {
            let game = store.start_game(Some("unique")).await.unwrap();
            assert!(seen.insert(game.session_id));
        }
        assert_eq!(store.session_count().await, 1000);
    }

    #[tokio::test]
    async fn test_custom_secret_is_validated_and_stored_uppercase() {
        let store = SessionStore::default();

        assert!(matches!(
            store.start_game(Some("hi")).await,
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            store.start_game(Some("hello123")).await,
            Err(GameError::InvalidInput(_))
        ));

        let game = store.start_game(Some("hello")).await.unwrap();
        assert_eq!(game.word_length, 5);

        // Win the game to see the stored secret
        for letter in ["h", "e", "l", "o"] {
            store.guess(&game.session_id, letter).await.unwrap();
        }
        let view = store.state(&game.session_id).await.unwrap();
        assert_eq!(view.secret_word.as_deref(), Some("HELLO"));
    }

    #[tokio::test]
    async fn test_guess_unknown_session_is_not_found() {
        let store = SessionStore::default();
        let result = store.guess("ZZZZZZ", "a").await;
        assert!(matches!(result, Err(GameError::NotFound(_))));

        let result = store.state("ZZZZZZ").await;
        assert!(matches!(result, Err(GameError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_id_is_invalid_input() {
        let store = SessionStore::default();

        for bad in ["", "abc", "toolong7", "low3rc", "AB-CD1"] {
            let result = store.guess(bad, "a").await;
            assert!(matches!(result, Err(GameError::InvalidInput(_))), "accepted {:?}", bad);

            let result = store.state(bad).await;
            assert!(matches!(result, Err(GameError::InvalidInput(_))), "accepted {:?}", bad);
        }
    }

    #[tokio::test]
    async fn test_invalid_letter_rejected_before_lookup() {
        let store = SessionStore::default();
        let result = store.guess("ZZZZZZ", "ab").await;
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_evict_expired_removes_idle_sessions() {
        let config = StoreConfig {
            session_ttl_seconds: 0,
            ..Default::default()
        };
        let store = SessionStore::new(config).unwrap();
        let game = store.start_game(Some("cat")).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(store.evict_expired().await, 1);

        let result = store.state(&game.session_id).await;
        assert!(matches!(result, Err(GameError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_evict_expired_keeps_active_sessions() {
        let store = SessionStore::default();
        let game = store.start_game(Some("cat")).await.unwrap();

        assert_eq!(store.evict_expired().await, 0);
        assert!(store.state(&game.session_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_evict_to_capacity_drops_least_recently_active() {
        let config = StoreConfig {
            max_sessions: 10,
            ..Default::default()
        };
        let store = SessionStore::new(config).unwrap();

        // Seed 15 sessions with strictly increasing activity timestamps
        {
            let mut sessions = store.sessions.lock().await;
            for i in 0..15 {
                let mut session = Session::new("CAT", 7);
                session.last_activity = 1000 + i as i64;
                sessions.insert(format!("SESS{:02}", i), session);
            }
        }

        let evicted = store.evict_to_capacity().await;
        assert_eq!(evicted, 6);
        assert_eq!(store.session_count().await, 9);

        // The six oldest are gone, the most recent survive
        for i in 0..6 {
            let result = store.state(&format!("SESS{:02}", i)).await;
            assert!(matches!(result, Err(GameError::NotFound(_))));
        }
        for i in 6..15 {
            assert!(store.state(&format!("SESS{:02}", i)).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_evict_to_capacity_noop_within_limit() {
        let store = SessionStore::default();
        store.start_game(Some("cat")).await.unwrap();
        assert_eq!(store.evict_to_capacity().await, 0);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_start_game_evicts_when_at_capacity() {
        let config = StoreConfig {
            max_sessions: 10,
            ..Default::default()
        };
        let store = SessionStore::new(config).unwrap();

        for _ in 0..10 {
            store.start_game(Some("cat")).await.unwrap();
        }
        assert_eq!(store.session_count().await, 10);

        // At capacity and nothing expired, so the oldest get trimmed
        // down to 90% before the new session lands
        let game = store.start_game(Some("dog")).await.unwrap();
        assert_eq!(store.session_count().await, 10);
        assert!(store.state(&game.session_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_state_touches_last_activity() {
        let store = SessionStore::default();
        let game = store.start_game(Some("cat")).await.unwrap();

        let before = {
            let sessions = store.sessions.lock().await;
            sessions[&game.session_id].last_activity
        };

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.state(&game.session_id).await.unwrap();

        let after = {
            let sessions = store.sessions.lock().await;
            sessions[&game.session_id].last_activity
        };
        assert!(after > before);
    }
}
