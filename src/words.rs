//! Word-source resolution
//!
//! The secret for a new game comes from a configured word file (one
//! word per line) or, when no file is configured or the configured
//! file is absent, from a small built-in list. The fallback is an
//! explicit resolution step with a logged warning, not a silent
//! catch-all.

use crate::error::{GameError, Result};
use rand::seq::SliceRandom;
use std::path::Path;

/// Built-in fallback word list
const BUILTIN_WORDS: &[&str] = &[
    "HANGMAN", "SESSION", "KEYBOARD", "PROGRAM", "LETTER", "PUZZLE", "SERVER", "MEMORY",
    "GALLOWS", "VICTORY",
];

/// Resolved list of candidate secret words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// The built-in default list
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a word list from a file, one word per line
    ///
    /// Lines are trimmed and uppercased; blank lines and lines with
    /// non-alphabetic characters are skipped. Fails with `Config` if
    /// the file cannot be read or yields no usable words.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GameError::Config(format!("Failed to read word file {}: {}", path.display(), e))
        })?;

        let words: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_ascii_uppercase())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();

        if words.is_empty() {
            return Err(GameError::Config(format!(
                "Word file {} contains no usable words",
                path.display()
            )));
        }

        Ok(Self { words })
    }

    /// Resolve the word source for a configuration
    ///
    /// Loads the configured file when it exists; falls back to the
    /// built-in list when no file is configured or the file is missing.
    /// A file that exists but is unreadable or empty is an error.
    pub fn resolve(word_file: Option<&Path>) -> Result<Self> {
        match word_file {
            Some(path) if path.exists() => {
                let list = Self::from_file(path)?;
                tracing::debug!(path = %path.display(), count = list.len(), "Word list loaded");
                Ok(list)
            }
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Word file not found, using built-in list"
                );
                Ok(Self::builtin())
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Pick a random word from the list
    pub fn choose(&self) -> &str {
        self.words
            .choose(&mut rand::thread_rng())
            .map(|w| w.as_str())
            .unwrap_or(BUILTIN_WORDS[0])
    }

    /// Number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty (never true for resolved lists)
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_list_is_uppercase_alphabetic() {
        let list = WordList::builtin();
        assert!(!list.is_empty());

        for word in &list.words {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_choose_returns_member() {
        let list = WordList::builtin();
        for _ in 0..20 {
            let word = list.choose().to_string();
            assert!(list.words.contains(&word));
        }
    }

    #[test]
    fn test_from_file_trims_and_uppercases() {
        let dir = std::env::temp_dir().join(format!("hangman-words-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        std::fs::write(&path, "  apple \n\nbanana\nch3rry\nCITRUS\n").unwrap();

        let list = WordList::from_file(&path).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.words.contains(&"APPLE".to_string()));
        assert!(list.words.contains(&"BANANA".to_string()));
        assert!(list.words.contains(&"CITRUS".to_string()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_from_file_empty_is_config_error() {
        let dir = std::env::temp_dir().join(format!("hangman-words-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        std::fs::write(&path, "\n  \n123\n").unwrap();

        let result = WordList::from_file(&path);
        assert!(matches!(result, Err(GameError::Config(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_missing_file_falls_back() {
        let list = WordList::resolve(Some(Path::new("/nonexistent/words.txt"))).unwrap();
        assert_eq!(list.len(), WordList::builtin().len());
    }

    #[test]
    fn test_resolve_none_uses_builtin() {
        let list = WordList::resolve(None).unwrap();
        assert_eq!(list.len(), WordList::builtin().len());
    }
}
