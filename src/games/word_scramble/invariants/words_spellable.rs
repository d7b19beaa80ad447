//! Spellability invariant: every used word comes from the root's letters.

use super::super::GameSession;
use super::super::rules::is_spellable_from;
use super::super::types::char_count;
use super::Invariant;

/// Invariant: every used word is long enough and spellable from the root.
pub struct WordsSpellableInvariant;

impl Invariant<GameSession> for WordsSpellableInvariant {
    fn holds(session: &GameSession) -> bool {
        let root = session.root_word().as_str();
        let min_length = *session.settings().min_length();
        session
            .used_words()
            .iter()
            .all(|word| char_count(word) >= min_length && is_spellable_from(root, word))
    }

    fn description() -> &'static str {
        "Used words meet the minimum length and are spellable from the root word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::word_scramble::test_support::session_with_root;

    #[test]
    fn test_detects_foreign_letters() {
        let mut session = session_with_root("silkworm");
        session.used_words_mut().push_front("zebra".to_string());
        assert!(!WordsSpellableInvariant::holds(&session));
    }

    #[test]
    fn test_detects_short_word() {
        let mut session = session_with_root("silkworm");
        session.used_words_mut().push_front("ow".to_string());
        assert!(!WordsSpellableInvariant::holds(&session));
    }
}
