//! Validation rules for candidate words.
//!
//! Each rule is a pure check over the round state. [`validate`] composes
//! them in a fixed order and stops at the first failure, so cheap and
//! obvious problems are reported before the dictionary is consulted.

pub mod length;
pub mod originality;
pub mod recognized;
pub mod root;
pub mod spellable;

pub use length::MinimumLength;
pub use originality::Original;
pub use recognized::RecognizedWord;
pub use root::NotRootWord;
pub use spellable::{SpellableFromRoot, is_spellable_from};

use super::{Candidate, Dictionary, Language, RejectionReason, RootWord, UsedWords};
use tracing::instrument;

/// Everything the rules need to judge a candidate.
pub struct RuleContext<'a> {
    /// Root word for the round.
    pub root: &'a RootWord,
    /// Words accepted so far this round.
    pub used: &'a UsedWords,
    /// Dictionary oracle.
    pub dictionary: &'a dyn Dictionary,
    /// Language handed to the dictionary.
    pub language: &'a Language,
    /// Minimum candidate length, in characters.
    pub min_length: usize,
}

/// Runs the candidate through every rule, in order.
///
/// 1. [`MinimumLength`]
/// 2. [`NotRootWord`]
/// 3. [`Original`]
/// 4. [`RecognizedWord`]
/// 5. [`SpellableFromRoot`]
#[instrument(skip(ctx), fields(word = %candidate, root = %ctx.root))]
pub fn validate(candidate: &Candidate, ctx: &RuleContext<'_>) -> Result<(), RejectionReason> {
    MinimumLength::check(candidate, ctx.min_length)?;
    NotRootWord::check(candidate, ctx.root)?;
    Original::check(candidate, ctx.used)?;
    RecognizedWord::check(candidate, ctx.dictionary, ctx.language)?;
    SpellableFromRoot::check(candidate, ctx.root)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn check(
        word: &str,
        used: &UsedWords,
        dictionary: &dyn Dictionary,
    ) -> Result<(), RejectionReason> {
        let root = RootWord::new("silkworm").unwrap();
        let language = Language::english();
        let ctx = RuleContext {
            root: &root,
            used,
            dictionary,
            language: &language,
            min_length: 3,
        };
        validate(&Candidate::normalize(word).unwrap(), &ctx)
    }

    fn everything(_: &str, _: &Language) -> bool {
        true
    }

    fn nothing(_: &str, _: &Language) -> bool {
        false
    }

    #[test]
    fn test_length_checked_before_dictionary() {
        assert_eq!(
            check("xy", &UsedWords::new(), &nothing),
            Err(RejectionReason::TooShort)
        );
    }

    #[test]
    fn test_root_checked_before_dictionary() {
        assert_eq!(
            check("silkworm", &UsedWords::new(), &nothing),
            Err(RejectionReason::IsRootWord)
        );
    }

    #[test]
    fn test_originality_checked_before_dictionary() {
        let mut used = UsedWords::new();
        used.push_front("silk".to_string());
        assert_eq!(check("silk", &used, &nothing), Err(RejectionReason::AlreadyUsed));
    }

    #[test]
    fn test_dictionary_checked_before_spelling() {
        // "zzzz" is neither real nor spellable: the dictionary wins.
        assert_eq!(
            check("zzzz", &UsedWords::new(), &nothing),
            Err(RejectionReason::NotARealWord)
        );
        assert_eq!(
            check("zzzz", &UsedWords::new(), &everything),
            Err(RejectionReason::NotSpellableFromRoot)
        );
    }

    #[test]
    fn test_dictionary_not_consulted_for_short_words() {
        let calls = Cell::new(0);
        let counting = |_: &str, _: &Language| {
            calls.set(calls.get() + 1);
            true
        };
        let _ = check("ab", &UsedWords::new(), &counting);
        assert_eq!(calls.get(), 0);
        let _ = check("silk", &UsedWords::new(), &counting);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_valid_word_passes() {
        assert!(check("worm", &UsedWords::new(), &everything).is_ok());
    }
}
