//! Score invariant: the score is the sum of the used words' lengths.

use super::super::GameSession;
use super::Invariant;

/// Invariant: score equals the total character count of the used words.
pub struct ScoreMatchesWordsInvariant;

impl Invariant<GameSession> for ScoreMatchesWordsInvariant {
    fn holds(session: &GameSession) -> bool {
        usize::try_from(session.score().value()).ok() == Some(session.used_words().total_chars())
    }

    fn description() -> &'static str {
        "Score equals the total length of the used words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::word_scramble::test_support::session_with_root;

    #[test]
    fn test_holds_after_acceptance() {
        let mut session = session_with_root("silkworm");
        session.submit("milk");
        assert!(ScoreMatchesWordsInvariant::holds(&session));
    }

    #[test]
    fn test_detects_untracked_word() {
        let mut session = session_with_root("silkworm");
        session.used_words_mut().push_front("milk".to_string());
        assert!(!ScoreMatchesWordsInvariant::holds(&session));
    }
}
