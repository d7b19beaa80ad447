//! Spellability rule: candidates are built from the root word's letters.

use super::super::{Candidate, RejectionReason, RootWord};
use tracing::{debug, instrument};

/// Returns true if every letter of `word` can be matched to a distinct
/// occurrence of that letter in `root`.
///
/// Each letter of `word` consumes the first remaining matching letter of
/// `root`; the first letter with no match left fails the check.
pub fn is_spellable_from(root: &str, word: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();

    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }

    true
}

/// Rule: the candidate must be spellable from the root word.
pub struct SpellableFromRoot;

impl SpellableFromRoot {
    /// Checks the candidate against the root word's letter multiset.
    #[instrument(skip_all, fields(word = %candidate, root = %root))]
    pub fn check(candidate: &Candidate, root: &RootWord) -> Result<(), RejectionReason> {
        if is_spellable_from(root.as_str(), candidate.as_str()) {
            Ok(())
        } else {
            debug!("Candidate uses letters the root word lacks");
            Err(RejectionReason::NotSpellableFromRoot)
        }
    }
}
