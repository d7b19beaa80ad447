//! Word scramble: spell new words from the letters of a root word.

mod dictionary;
mod invariants;
mod provider;
mod rejection;
pub mod rules;
mod session;
mod types;

pub use dictionary::{Dictionary, WordListDictionary};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, ScoreMatchesWordsInvariant, SessionInvariants,
    UniqueWordsInvariant, WordsSpellableInvariant,
};
pub use provider::{
    DEFAULT_ROOT_WORD, RootWordProvider, SessionStartFailed, WordList, WordListError,
    default_root_word,
};
pub use rejection::{Rejection, RejectionReason, SubmitOutcome};
pub use session::{DEFAULT_MIN_LENGTH, GameSession, PendingSession, SessionSettings};
pub use types::{Candidate, InvalidRootWord, Language, RootWord, Score, UsedWords, char_count};
