//! Minimum length rule.

use super::super::{Candidate, RejectionReason};
use tracing::{debug, instrument};

/// Rule: the candidate must have at least `min_length` characters.
pub struct MinimumLength;

impl MinimumLength {
    /// Checks the candidate's character count against `min_length`.
    #[instrument(skip(candidate), fields(word = %candidate))]
    pub fn check(candidate: &Candidate, min_length: usize) -> Result<(), RejectionReason> {
        if candidate.len() < min_length {
            debug!(length = candidate.len(), "Candidate too short");
            Err(RejectionReason::TooShort)
        } else {
            Ok(())
        }
    }
}
