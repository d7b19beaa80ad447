//! Round state and the submission pipeline.

use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{self, RuleContext};
use super::{
    Candidate, Dictionary, Language, Rejection, RootWord, RootWordProvider, Score,
    SessionStartFailed, SubmitOutcome, UsedWords,
};
use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default minimum candidate length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Rule parameters for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize, new)]
#[setters(prefix = "with_")]
pub struct SessionSettings {
    /// Minimum candidate length, in characters.
    min_length: usize,
    /// Language handed to the dictionary.
    language: Language,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, Language::english())
    }
}

/// A session whose first round has not started yet.
///
/// Holds everything a [`GameSession`] needs. [`PendingSession::start`]
/// hands the parts back on failure so starting can be retried, for
/// example after the word list file has been fixed.
pub struct PendingSession {
    provider: RootWordProvider,
    dictionary: Box<dyn Dictionary + Send>,
    settings: SessionSettings,
    rng: Box<dyn RngCore + Send>,
}

impl std::fmt::Debug for PendingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSession")
            .field("provider", &self.provider)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl PendingSession {
    /// Collects the parts of a session.
    pub fn new(
        provider: RootWordProvider,
        dictionary: impl Dictionary + Send + 'static,
        settings: SessionSettings,
        rng: impl RngCore + Send + 'static,
    ) -> Self {
        Self {
            provider,
            dictionary: Box::new(dictionary),
            settings,
            rng: Box::new(rng),
        }
    }

    /// Collects the parts of a session seeded from the operating system.
    pub fn with_entropy(
        provider: RootWordProvider,
        dictionary: impl Dictionary + Send + 'static,
        settings: SessionSettings,
    ) -> Self {
        Self::new(provider, dictionary, settings, StdRng::from_entropy())
    }

    /// Collects the parts of a session with a deterministic seed.
    pub fn with_seed(
        provider: RootWordProvider,
        dictionary: impl Dictionary + Send + 'static,
        settings: SessionSettings,
        seed: u64,
    ) -> Self {
        Self::new(provider, dictionary, settings, StdRng::seed_from_u64(seed))
    }

    /// Rule parameters the session will use.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Starts the first round.
    ///
    /// # Errors
    ///
    /// Returns the pending session together with [`SessionStartFailed`]
    /// when no root word is available.
    #[instrument(skip(self))]
    pub fn start(mut self) -> Result<GameSession, (Self, SessionStartFailed)> {
        let root_word = match self.provider.choose_root_word(self.rng.as_mut()) {
            Ok(word) => word,
            Err(e) => {
                warn!(error = %e, "First round could not start");
                return Err((self, e));
            }
        };
        info!(root = %root_word, "Creating new game session");

        Ok(GameSession {
            provider: self.provider,
            dictionary: self.dictionary,
            settings: self.settings,
            rng: self.rng,
            root_word,
            used_words: UsedWords::new(),
            score: Score::ZERO,
            round: 1,
        })
    }
}

/// A single-player game session.
///
/// Owns the round state (root word, used words, score). The only ways to
/// change it are [`GameSession::reset`] and [`GameSession::submit`].
pub struct GameSession {
    provider: RootWordProvider,
    dictionary: Box<dyn Dictionary + Send>,
    settings: SessionSettings,
    rng: Box<dyn RngCore + Send>,
    root_word: RootWord,
    used_words: UsedWords,
    score: Score,
    round: u32,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("settings", &self.settings)
            .field("root_word", &self.root_word)
            .field("used_words", &self.used_words)
            .field("score", &self.score)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Creates a session and starts its first round.
    ///
    /// Use [`PendingSession::start`] to keep the parts for a retry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStartFailed`] when the provider has neither words
    /// nor a fallback.
    pub fn new(
        provider: RootWordProvider,
        dictionary: impl Dictionary + Send + 'static,
        settings: SessionSettings,
        rng: impl RngCore + Send + 'static,
    ) -> Result<Self, SessionStartFailed> {
        PendingSession::new(provider, dictionary, settings, rng)
            .start()
            .map_err(|(_, e)| e)
    }

    /// Creates a session seeded from the operating system's entropy.
    pub fn with_entropy(
        provider: RootWordProvider,
        dictionary: impl Dictionary + Send + 'static,
        settings: SessionSettings,
    ) -> Result<Self, SessionStartFailed> {
        Self::new(provider, dictionary, settings, StdRng::from_entropy())
    }

    /// Creates a session with a deterministic seed.
    pub fn with_seed(
        provider: RootWordProvider,
        dictionary: impl Dictionary + Send + 'static,
        settings: SessionSettings,
        seed: u64,
    ) -> Result<Self, SessionStartFailed> {
        Self::new(provider, dictionary, settings, StdRng::seed_from_u64(seed))
    }

    /// Starts a new round: picks a root word, clears used words and score.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStartFailed`] when no root word is available. The
    /// previous round is left untouched so the caller can retry.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset(&mut self) -> Result<(), SessionStartFailed> {
        let root_word = self.provider.choose_root_word(self.rng.as_mut())?;

        self.root_word = root_word;
        self.used_words.clear();
        self.score = Score::ZERO;
        self.round = self.round.saturating_add(1);

        info!(root = %self.root_word, round = self.round, "Started new round");
        Ok(())
    }

    /// Submits a candidate word.
    ///
    /// The input is lowercased and trimmed first. Empty input is ignored.
    /// Otherwise the word goes through the rules in order; on success it is
    /// prepended to the used words and its length added to the score. A
    /// rejection leaves the session unchanged.
    #[instrument(skip(self), fields(root = %self.root_word))]
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let Some(candidate) = Candidate::normalize(raw) else {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        };

        let ctx = RuleContext {
            root: &self.root_word,
            used: &self.used_words,
            dictionary: self.dictionary.as_ref(),
            language: &self.settings.language,
            min_length: self.settings.min_length,
        };

        if let Err(reason) = rules::validate(&candidate, &ctx) {
            info!(word = %candidate, %reason, "Word rejected");
            return SubmitOutcome::Rejected(Rejection::new(candidate.into_inner(), reason));
        }

        let points = candidate.len();
        let word = candidate.into_inner();
        self.score = self.score.plus(points);
        self.used_words.push_front(word.clone());

        info!(word = %word, points, score = %self.score, "Word accepted");
        self.assert_invariants();

        SubmitOutcome::Accepted {
            word,
            score: self.score,
        }
    }

    /// Root word of the current round.
    pub fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Words accepted this round, most recent first.
    pub fn used_words(&self) -> &UsedWords {
        &self.used_words
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Number of rounds started by this session, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rule parameters.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    fn assert_invariants(&self) {
        if let Err(violations) = SessionInvariants::check_all(self) {
            for violation in &violations {
                warn!(%violation, "Session invariant violated");
            }
            debug_assert!(violations.is_empty(), "Session invariants violated");
        }
    }

    #[cfg(test)]
    pub(crate) fn used_words_mut(&mut self) -> &mut UsedWords {
        &mut self.used_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::word_scramble::test_support::session_with_root;
    use crate::games::word_scramble::{RejectionReason, WordList};

    #[test]
    fn test_new_session_starts_clean() {
        let session = session_with_root("silkworm");
        assert_eq!(session.root_word().as_str(), "silkworm");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), Score::ZERO);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn test_accept_prepends_and_scores() {
        let mut session = session_with_root("silkworm");
        assert_eq!(
            session.submit("silk"),
            SubmitOutcome::Accepted {
                word: "silk".to_string(),
                score: Score::new(4),
            }
        );
        session.submit("worm");
        assert_eq!(session.used_words().as_slice(), ["worm", "silk"]);
        assert_eq!(session.score(), Score::new(8));
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        let before = (session.used_words().clone(), session.score());

        let outcome = session.submit("silkworms");
        assert_eq!(
            outcome.rejection_reason(),
            Some(RejectionReason::NotSpellableFromRoot)
        );
        assert_eq!((session.used_words().clone(), session.score()), before);
    }

    #[test]
    fn test_rejection_carries_normalized_word() {
        let mut session = session_with_root("silkworm");
        match session.submit("  SILKWORMS\n") {
            SubmitOutcome::Rejected(rejection) => assert_eq!(rejection.word(), "silkworms"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_clears_round() {
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        session.reset().unwrap();
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), Score::ZERO);
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn test_pending_start_failure_returns_parts() {
        let pending = PendingSession::with_seed(
            RootWordProvider::new(WordList::default(), None),
            |_: &str, _: &Language| true,
            SessionSettings::default().with_min_length(4),
            0,
        );
        let (pending, err) = pending.start().unwrap_err();
        assert!(err.to_string().contains("Could not start a round"));
        assert_eq!(*pending.settings().min_length(), 4);
    }

    #[test]
    fn test_custom_min_length() {
        let provider = RootWordProvider::new(WordList::parse("silkworm\n"), None);
        let settings = SessionSettings::default().with_min_length(5);
        let mut session =
            GameSession::with_seed(provider, |_: &str, _: &Language| true, settings, 0).unwrap();
        assert_eq!(
            session.submit("silk").rejection_reason(),
            Some(RejectionReason::TooShort)
        );
        assert!(session.submit("works").is_accepted());
    }
}
