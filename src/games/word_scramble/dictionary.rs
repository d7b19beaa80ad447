//! Dictionary oracle used by the "real word" rule.

use super::Language;
use super::provider::WordListError;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Answers whether a word is a recognized dictionary word in a language.
///
/// Any `Fn(&str, &Language) -> bool` is a dictionary, which keeps tests
/// free of real word lists.
pub trait Dictionary {
    /// Returns true if `word` is a real word in `language`.
    fn is_recognized(&self, word: &str, language: &Language) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &Language) -> bool,
{
    fn is_recognized(&self, word: &str, language: &Language) -> bool {
        self(word, language)
    }
}

/// A dictionary backed by an in-memory word set for a single language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: Language,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Builds a dictionary from newline-separated text.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    #[instrument(skip(text))]
    pub fn parse(language: Language, text: &str) -> Self {
        let words: HashSet<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        debug!(count = words.len(), "Parsed dictionary words");
        Self { language, words }
    }

    /// Loads a dictionary from a newline-separated word file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(language: Language, path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WordListError::new(format!(
                "Failed to read dictionary {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let dictionary = Self::parse(language, &text);
        info!(count = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Language the word set belongs to.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized(&self, word: &str, language: &Language) -> bool {
        language == &self.language && self.words.contains(word)
    }
}
