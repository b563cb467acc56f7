//! # hangman-core
//!
//! Server-side word-guessing core: an in-memory session registry with
//! TTL and capacity eviction, plus a pure game engine that applies
//! guesses and projects the partially-revealed word.
//!
//! ## Overview
//!
//! Transport concerns (HTTP routing, JSON framing, static pages) live
//! in thin adapters outside this crate. The adapter locates a session
//! through [`SessionStore`], the store runs the [`engine`] transition
//! under its lock, and the resulting projection goes back out as-is.
//!
//! ## Quick Start
//!
//! ```rust
//! use hangman_core::{SessionStore, StoreConfig};
//!
//! # async fn example() -> hangman_core::Result<()> {
//! let store = SessionStore::new(StoreConfig::default())?;
//!
//! let game = store.start_game(Some("rustacean")).await?;
//! let outcome = store.guess(&game.session_id, "r").await?;
//!
//! println!(
//!     "{:?} ({} chances left)",
//!     outcome.display_word, outcome.chances
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`SessionStore`]** — owns all sessions behind one exclusive
//!   lock; allocates 6-character ids, enforces TTL and capacity
//! - **[`engine`]** — pure state transitions over a single session;
//!   never outlives one call, holds no state of its own
//! - **[`WordList`]** — explicit word-source resolution: configured
//!   file when present, built-in list otherwise

pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod types;
pub mod words;

// Re-export core types
pub use config::StoreConfig;
pub use error::{GameError, Result};
pub use store::SessionStore;
pub use types::{GameView, GuessOutcome, GuessStatus, Session, StartedGame};
pub use words::WordList;
