//! Pure game-state transitions
//!
//! Operates on a single [`Session`] plus one input letter. Holds no
//! state of its own and knows nothing about the store, identifiers,
//! or time — the store hands it one session for the duration of one
//! call and persists whatever comes back.

use crate::error::{GameError, Result};
use crate::types::{GuessOutcome, GuessStatus, Session};

/// Placeholder for unrevealed positions in the display projection
pub const HIDDEN: char = '_';

/// Validate a guess input
///
/// Accepts exactly one alphabetic character (case-insensitive) and
/// normalizes it to uppercase.
pub fn validate_letter(input: &str) -> Result<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(GameError::InvalidInput(format!(
            "Guess must be a single letter, got {:?}",
            input
        ))),
    }
}

/// Validate a user-supplied secret word
///
/// Trims and uppercases the candidate, then requires `min_len..=max_len`
/// alphabetic characters.
pub fn validate_custom_secret(candidate: &str, min_len: usize, max_len: usize) -> Result<String> {
    let word = candidate.trim().to_ascii_uppercase();
    if word.len() < min_len || word.len() > max_len {
        return Err(GameError::InvalidInput(format!(
            "Custom word must be {}-{} letters, got {}",
            min_len,
            max_len,
            word.len()
        )));
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GameError::InvalidInput(
            "Custom word must contain only letters".to_string(),
        ));
    }
    Ok(word)
}

/// Build the display projection for a session
///
/// One entry per secret position: the character itself when it has
/// been guessed, [`HIDDEN`] otherwise. Used identically by the
/// read-state operation and the post-guess response.
pub fn project(session: &Session) -> Vec<char> {
    session
        .secret
        .chars()
        .map(|c| if session.guessed.contains(&c) { c } else { HIDDEN })
        .collect()
}

/// Apply one guessed letter to a session and produce the outcome
///
/// Terminal sessions and repeated letters short-circuit without
/// mutating game state. A miss decrements `chances` with a floor of
/// zero; the win check runs before the loss check, so completing the
/// word on the last chance still wins.
pub fn apply_guess(session: &mut Session, letter: char) -> GuessOutcome {
    if session.game_over {
        return GuessOutcome {
            status: GuessStatus::AlreadyOver,
            display_word: project(session),
            chances: session.chances,
            game_over: true,
            won: session.won,
            correct_guess: None,
            secret_word: Some(session.secret.clone()),
        };
    }

    if session.has_guessed(letter) {
        return GuessOutcome {
            status: GuessStatus::Repeat,
            display_word: project(session),
            chances: session.chances,
            game_over: false,
            won: false,
            correct_guess: None,
            secret_word: None,
        };
    }

    session.guessed.push(letter);

    let correct = session.secret.contains(letter);
    if !correct {
        session.chances = session.chances.saturating_sub(1);
    }

    let word_completed = session.secret.chars().all(|c| session.guessed.contains(&c));
    if word_completed {
        session.game_over = true;
        session.won = true;
    } else if session.chances == 0 {
        session.game_over = true;
        session.won = false;
    }

    GuessOutcome {
        status: GuessStatus::Applied,
        display_word: project(session),
        chances: session.chances,
        game_over: session.game_over,
        won: session.won,
        correct_guess: Some(correct),
        secret_word: session.game_over.then(|| session.secret.clone()),
    }
}
