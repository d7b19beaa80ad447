//! Root word rule.

use super::super::{Candidate, RejectionReason, RootWord};
use tracing::{debug, instrument};

/// Rule: the candidate must not be the root word itself.
pub struct NotRootWord;

impl NotRootWord {
    /// Checks that the candidate differs from the root word.
    #[instrument(skip_all, fields(word = %candidate, root = %root))]
    pub fn check(candidate: &Candidate, root: &RootWord) -> Result<(), RejectionReason> {
        if candidate.as_str() == root.as_str() {
            debug!("Candidate is the root word");
            Err(RejectionReason::IsRootWord)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_word_rejected() {
        let root = RootWord::new("silkworm").unwrap();
        let candidate = Candidate::normalize(" SILKWORM ").unwrap();
        assert_eq!(
            NotRootWord::check(&candidate, &root),
            Err(RejectionReason::IsRootWord)
        );
    }

    #[test]
    fn test_other_word_allowed() {
        let root = RootWord::new("silkworm").unwrap();
        let candidate = Candidate::normalize("silk").unwrap();
        assert!(NotRootWord::check(&candidate, &root).is_ok());
    }
}
