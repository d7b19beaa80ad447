//! Root word selection.

use super::RootWord;
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Default root word used when no word list is available.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Word list error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// No root word could be obtained for a new round.
///
/// Recoverable: the caller may fix the word list or configure a fallback
/// and call [`GameSession::reset`](super::GameSession::reset) again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Could not start a round: {}", reason)]
pub struct SessionStartFailed {
    /// Why no root word was available.
    pub reason: String,
}

impl SessionStartFailed {
    /// Creates the error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A flat collection of candidate root words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<RootWord>,
}

impl WordList {
    /// Wraps already validated root words.
    pub fn new(words: Vec<RootWord>) -> Self {
        Self { words }
    }

    /// Parses newline-separated words.
    ///
    /// Lines are trimmed. Blank lines and lines that are not valid root
    /// words are skipped.
    #[instrument(skip(text))]
    pub fn parse(text: &str) -> Self {
        let mut skipped = 0usize;
        let words: Vec<RootWord> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match RootWord::new(line) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!(error = %e, "Skipping word list entry");
                    skipped += 1;
                    None
                }
            })
            .collect();
        debug!(count = words.len(), skipped, "Parsed word list");
        Self { words }
    }

    /// Loads a newline-separated word list file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WordListError::new(format!(
                "Failed to read word list {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let list = Self::parse(&text);
        info!(count = list.len(), "Word list loaded");
        Ok(list)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words.
    pub fn words(&self) -> &[RootWord] {
        &self.words
    }
}

/// Supplies a root word for each new round.
///
/// A provider built with [`RootWordProvider::from_path`] rereads its file
/// at every round start, so a list that was missing or empty can be fixed
/// while the game is running.
#[derive(Debug, Clone)]
pub struct RootWordProvider {
    list: WordList,
    source: Option<PathBuf>,
    fallback: Option<RootWord>,
}

impl RootWordProvider {
    /// Creates a provider drawing from `list`, falling back to `fallback`
    /// when the list is empty.
    pub fn new(list: WordList, fallback: Option<RootWord>) -> Self {
        Self {
            list,
            source: None,
            fallback,
        }
    }

    /// Creates a provider that only ever returns the default root word.
    pub fn fallback_only() -> Self {
        Self::new(WordList::default(), Some(default_root_word()))
    }

    /// Creates a provider backed by a word list file.
    ///
    /// The file is read when a round starts, not here. An unreadable file
    /// is treated as an unavailable resource: it is logged and the
    /// provider relies on `fallback`.
    pub fn from_path(path: impl Into<PathBuf>, fallback: Option<RootWord>) -> Self {
        Self {
            list: WordList::default(),
            source: Some(path.into()),
            fallback,
        }
    }

    /// The word list as of the most recent load.
    pub fn list(&self) -> &WordList {
        &self.list
    }

    /// The word list file, if this provider is backed by one.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The fallback root word, if any.
    pub fn fallback(&self) -> Option<&RootWord> {
        self.fallback.as_ref()
    }

    /// Rereads the word list file. Does nothing for in-memory lists.
    #[instrument(skip(self), fields(source = ?self.source))]
    pub fn reload(&mut self) {
        let Some(path) = &self.source else {
            return;
        };
        self.list = match WordList::load(path) {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "Word list unavailable");
                WordList::default()
            }
        };
    }

    /// Picks a root word uniformly at random from the list.
    ///
    /// A file-backed list is reloaded first. Uses the fallback when the
    /// list is empty, and fails only when there is no fallback either.
    #[instrument(skip_all, fields(source = ?self.source))]
    pub fn choose_root_word<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<RootWord, SessionStartFailed> {
        self.reload();

        if let Some(word) = self.list.words.choose(rng) {
            debug!(root = %word, list_len = self.list.len(), "Chose root word from list");
            return Ok(word.clone());
        }

        match &self.fallback {
            Some(word) => {
                warn!(root = %word, "Word list empty, using fallback root word");
                Ok(word.clone())
            }
            None => {
                warn!("Word list empty and no fallback configured");
                Err(SessionStartFailed::new(
                    "word list is empty or unavailable and no fallback word is configured",
                ))
            }
        }
    }
}

impl Default for RootWordProvider {
    fn default() -> Self {
        Self::fallback_only()
    }
}

/// The built-in fallback root word.
pub fn default_root_word() -> RootWord {
    RootWord::from_static(DEFAULT_ROOT_WORD)
}
