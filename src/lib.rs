//! Word Scramble library - a word-building game core
//!
//! A round starts from a randomly chosen root word. The player submits
//! candidate words, each checked against a fixed sequence of rules, and
//! accepted words add their length to the score.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] owns the round state; `reset` and `submit`
//!   are the only mutations
//! - **Rules**: the validation pipeline in [`rules`]
//! - **Provider**: [`RootWordProvider`] draws root words from a word list,
//!   rereading its file at each round start
//! - **Dictionary**: the [`Dictionary`] oracle, injectable for tests
//! - **TUI**: a terminal front end that renders outcomes
//!
//! # Example
//!
//! ```
//! use word_scramble::{
//!     GameSession, Language, RootWordProvider, SessionSettings, SubmitOutcome, WordList,
//! };
//!
//! # fn example() -> Result<(), word_scramble::SessionStartFailed> {
//! let provider = RootWordProvider::new(WordList::parse("silkworm\n"), None);
//! let dictionary = |word: &str, _: &Language| ["silk", "worm"].contains(&word);
//! let settings = SessionSettings::default();
//! let mut session = GameSession::with_seed(provider, dictionary, settings, 7)?;
//!
//! assert!(matches!(session.submit("Silk"), SubmitOutcome::Accepted { .. }));
//! assert_eq!(session.score().value(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (word scramble)
pub use games::word_scramble::{
    Candidate, DEFAULT_MIN_LENGTH, DEFAULT_ROOT_WORD, Dictionary, GameSession, InvalidRootWord,
    Language, PendingSession, Rejection, RejectionReason, RootWord, RootWordProvider, Score,
    SessionSettings, SessionStartFailed, SubmitOutcome, UsedWords, WordList, WordListDictionary,
    WordListError, char_count, default_root_word,
};

// Crate-level exports - Invariants
pub use games::word_scramble::{
    Invariant, InvariantSet, InvariantViolation, ScoreMatchesWordsInvariant, SessionInvariants,
    UniqueWordsInvariant, WordsSpellableInvariant,
};

// Crate-level exports - Validation rules
pub use games::word_scramble::rules;

// Crate-level exports - Terminal UI
pub use tui::{Alert, App, alert_for, run_tui, start_failed_alert};
