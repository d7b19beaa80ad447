//! Core domain types for word scramble.
//!
//! Lengths and scores are measured in Unicode scalar values
//! (`str::chars`), never in bytes.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Counts the characters of a word, in Unicode scalar values.
pub fn char_count(word: &str) -> usize {
    word.chars().count()
}

/// Error returned when a string cannot be used as a root word.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid root word {:?}: must be non-empty lowercase letters", word)]
pub struct InvalidRootWord {
    /// The rejected input.
    pub word: String,
}

/// The word whose letters make up the alphabet for a round.
///
/// Always non-empty and made only of lowercase alphabetic characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct RootWord(String);

impl RootWord {
    /// Validates and wraps a root word.
    pub fn new(word: impl Into<String>) -> Result<Self, InvalidRootWord> {
        let word = word.into();
        let valid = !word.is_empty() && word.chars().all(|c| c.is_alphabetic() && c.is_lowercase());
        if valid {
            Ok(Self(word))
        } else {
            Err(InvalidRootWord { word })
        }
    }

    /// Wraps a compile-time word known to be valid.
    pub(crate) fn from_static(word: &'static str) -> Self {
        debug_assert!(Self::new(word).is_ok(), "invalid static root word");
        Self(word.to_string())
    }

    /// Returns the root word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the root word.
    pub fn len(&self) -> usize {
        char_count(&self.0)
    }

    /// Always false; a root word is never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RootWord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let word = String::deserialize(deserializer)?;
        RootWord::new(word).map_err(serde::de::Error::custom)
    }
}

/// A normalized candidate word, ready for validation.
///
/// Normalization lowercases the raw input and trims surrounding
/// whitespace, newlines included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Candidate(String);

impl Candidate {
    /// Normalizes raw player input.
    ///
    /// Returns `None` when nothing is left after trimming, which callers
    /// treat as a silent no-op.
    #[instrument]
    pub fn normalize(raw: &str) -> Option<Self> {
        let word = raw.to_lowercase().trim().to_string();
        if word.is_empty() { None } else { Some(Self(word)) }
    }

    /// Returns the normalized word.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the candidate.
    pub fn len(&self) -> usize {
        char_count(&self.0)
    }

    /// Always false; normalization never yields an empty candidate.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the candidate, returning the owned word.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Accepted words for the current round, most recent first.
///
/// The container itself does not deduplicate; the validation pipeline
/// guarantees that every entry is unique and valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsedWords {
    words: Vec<String>,
}

impl UsedWords {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the word has already been accepted this round.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterates over the words, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the words as a slice, most recent first.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Number of accepted words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no word has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of the character counts of every accepted word.
    pub fn total_chars(&self) -> usize {
        self.words.iter().map(|w| char_count(w)).sum()
    }

    pub(crate) fn push_front(&mut self, word: String) {
        self.words.insert(0, word);
    }

    pub(crate) fn clear(&mut self) {
        self.words.clear();
    }
}

/// Running score for a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub struct Score(u32);

impl Score {
    /// A score of zero.
    pub const ZERO: Score = Score(0);

    /// Creates a score with the given value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns this score increased by `points`, saturating at `u32::MAX`.
    pub fn plus(self, points: usize) -> Self {
        let points = u32::try_from(points).unwrap_or(u32::MAX);
        Self(self.0.saturating_add(points))
    }
}

/// Language code handed to the dictionary oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Creates a language code, e.g. `"en"`.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// English.
    pub fn english() -> Self {
        Self::new("en")
    }

    /// Returns the code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}
