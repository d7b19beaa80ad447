//! Dictionary rule.

use super::super::{Candidate, Dictionary, Language, RejectionReason};
use tracing::{debug, instrument};

/// Rule: the dictionary must recognize the candidate in the session language.
pub struct RecognizedWord;

impl RecognizedWord {
    /// Asks the dictionary whether the candidate is a real word.
    #[instrument(skip_all, fields(word = %candidate, language = %language))]
    pub fn check(
        candidate: &Candidate,
        dictionary: &dyn Dictionary,
        language: &Language,
    ) -> Result<(), RejectionReason> {
        if dictionary.is_recognized(candidate.as_str(), language) {
            Ok(())
        } else {
            debug!("Candidate not recognized by dictionary");
            Err(RejectionReason::NotARealWord)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_decides() {
        let only_silk = |word: &str, _: &Language| word == "silk";
        let en = Language::english();

        let silk = Candidate::normalize("silk").unwrap();
        assert!(RecognizedWord::check(&silk, &only_silk, &en).is_ok());

        let slik = Candidate::normalize("slik").unwrap();
        assert_eq!(
            RecognizedWord::check(&slik, &only_silk, &en),
            Err(RejectionReason::NotARealWord)
        );
    }

    #[test]
    fn test_language_forwarded() {
        let english_only = |_: &str, language: &Language| language.code() == "en";
        let silk = Candidate::normalize("silk").unwrap();
        assert!(RecognizedWord::check(&silk, &english_only, &Language::english()).is_ok());
        assert!(RecognizedWord::check(&silk, &english_only, &Language::new("fr")).is_err());
    }
}
