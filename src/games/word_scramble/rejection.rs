//! Submission outcomes.
//!
//! Rejections are values, not errors: the core reports a reason code and
//! leaves the wording to the presentation layer.

use super::Score;
use derive_getters::Getters;
use serde::Serialize;

/// Why a candidate word was turned down.
///
/// Variants are listed in the order the pipeline checks them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    derive_more::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RejectionReason {
    /// Fewer characters than the minimum length.
    #[display("too short")]
    TooShort,
    /// The candidate is the root word itself.
    #[display("is the root word")]
    IsRootWord,
    /// The candidate was already accepted this round.
    #[display("already used")]
    AlreadyUsed,
    /// The dictionary does not recognize the candidate.
    #[display("not a real word")]
    NotARealWord,
    /// The candidate needs letters the root word does not have.
    #[display("not spellable from the root word")]
    NotSpellableFromRoot,
}

/// A rejected submission: the normalized word and the first rule it failed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, derive_more::Display)]
#[display("{:?} rejected: {}", word, reason)]
pub struct Rejection {
    /// Normalized candidate word.
    word: String,
    /// Rule that failed.
    reason: RejectionReason,
}

impl Rejection {
    /// Creates a rejection.
    pub fn new(word: impl Into<String>, reason: RejectionReason) -> Self {
        Self {
            word: word.into(),
            reason,
        }
    }
}

/// Result of [`GameSession::submit`](super::GameSession::submit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Input was empty after normalization; nothing happened.
    Ignored,
    /// The word was accepted and the score updated.
    Accepted {
        /// Normalized word that was added to the used words.
        word: String,
        /// Score after the word was added.
        score: Score,
    },
    /// The word failed a rule; session state is unchanged.
    Rejected(Rejection),
}

impl SubmitOutcome {
    /// Returns true for [`SubmitOutcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the rejection reason, if any.
    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected(rejection) => Some(*rejection.reason()),
            _ => None,
        }
    }
}
