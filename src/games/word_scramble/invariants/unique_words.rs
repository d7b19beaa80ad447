//! Uniqueness invariant: no duplicates, never the root word.

use super::super::GameSession;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: used words are distinct and never the root word.
pub struct UniqueWordsInvariant;

impl Invariant<GameSession> for UniqueWordsInvariant {
    fn holds(session: &GameSession) -> bool {
        let root = session.root_word().as_str();
        let mut seen = HashSet::new();
        session
            .used_words()
            .iter()
            .all(|word| word != root && seen.insert(word))
    }

    fn description() -> &'static str {
        "Used words are unique and never the root word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::word_scramble::test_support::session_with_root;

    #[test]
    fn test_detects_duplicate() {
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        session.used_words_mut().push_front("silk".to_string());
        assert!(!UniqueWordsInvariant::holds(&session));
    }

    #[test]
    fn test_detects_root_word() {
        let mut session = session_with_root("silkworm");
        session.used_words_mut().push_front("silkworm".to_string());
        assert!(!UniqueWordsInvariant::holds(&session));
    }
}
