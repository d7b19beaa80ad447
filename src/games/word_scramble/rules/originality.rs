//! Originality rule.

use super::super::{Candidate, RejectionReason, UsedWords};
use tracing::{debug, instrument};

/// Rule: the candidate must not have been accepted already this round.
pub struct Original;

impl Original {
    /// Checks that the candidate is not among the used words.
    #[instrument(skip_all, fields(word = %candidate, used = used.len()))]
    pub fn check(candidate: &Candidate, used: &UsedWords) -> Result<(), RejectionReason> {
        if used.contains(candidate.as_str()) {
            debug!("Candidate already used");
            Err(RejectionReason::AlreadyUsed)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_word_rejected() {
        let mut used = UsedWords::new();
        used.push_front("silk".to_string());
        let candidate = Candidate::normalize("Silk").unwrap();
        assert_eq!(
            Original::check(&candidate, &used),
            Err(RejectionReason::AlreadyUsed)
        );
    }

    #[test]
    fn test_fresh_word_allowed() {
        let used = UsedWords::new();
        let candidate = Candidate::normalize("silk").unwrap();
        assert!(Original::check(&candidate, &used).is_ok());
    }
}
