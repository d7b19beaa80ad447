//! Tests for root word loading and round start failures.

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;
use word_scramble::{
    DEFAULT_ROOT_WORD, GameSession, Language, PendingSession, RootWord, RootWordProvider,
    SessionSettings, WordList, default_root_word,
};

fn accept_all(_: &str, _: &Language) -> bool {
    true
}

fn word_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_word_list_from_file() {
    let file = word_file("silkworm\nabsolute\n\ncucumber\n");
    let list = WordList::load(file.path()).expect("Load failed");
    let words: Vec<&str> = list.words().iter().map(RootWord::as_str).collect();
    assert_eq!(words, vec!["silkworm", "absolute", "cucumber"]);
}

#[test]
fn test_provider_draws_only_listed_words() {
    let file = word_file("absolute\ncucumber\n");
    let mut provider = RootWordProvider::from_path(file.path(), Some(default_root_word()));
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let root = provider.choose_root_word(&mut rng).unwrap();
        assert!(["absolute", "cucumber"].contains(&root.as_str()));
    }
}

#[test]
fn test_empty_file_uses_fallback() {
    let file = word_file("\n\n   \n");
    let provider = RootWordProvider::from_path(file.path(), Some(default_root_word()));
    let session =
        GameSession::with_seed(provider, accept_all, SessionSettings::default(), 0).unwrap();
    assert_eq!(session.root_word().as_str(), DEFAULT_ROOT_WORD);
}

#[test]
fn test_missing_file_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let provider =
        RootWordProvider::from_path(dir.path().join("start.txt"), Some(default_root_word()));
    let session =
        GameSession::with_seed(provider, accept_all, SessionSettings::default(), 0).unwrap();
    assert_eq!(session.root_word().as_str(), DEFAULT_ROOT_WORD);
}

#[test]
fn test_no_words_and_no_fallback_fails_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let provider = RootWordProvider::from_path(dir.path().join("start.txt"), None);
    let result = GameSession::with_seed(provider, accept_all, SessionSettings::default(), 0);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Could not start a round"));
}

#[test]
fn test_custom_fallback_word() {
    let provider = RootWordProvider::new(
        WordList::default(),
        Some(RootWord::new("butterfly").unwrap()),
    );
    let session =
        GameSession::with_seed(provider, accept_all, SessionSettings::default(), 0).unwrap();
    assert_eq!(session.root_word().as_str(), "butterfly");
}

#[test]
fn test_word_list_reread_at_each_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("start.txt");
    let mut session = GameSession::with_seed(
        RootWordProvider::from_path(&path, Some(default_root_word())),
        accept_all,
        SessionSettings::default(),
        0,
    )
    .unwrap();
    assert_eq!(session.root_word().as_str(), DEFAULT_ROOT_WORD);

    std::fs::write(&path, "absolute\n").unwrap();
    session.reset().unwrap();
    assert_eq!(session.root_word().as_str(), "absolute");
}

#[test]
fn test_failed_start_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("start.txt");
    let pending = PendingSession::with_seed(
        RootWordProvider::from_path(&path, None),
        accept_all,
        SessionSettings::default(),
        0,
    );

    let (pending, err) = pending.start().unwrap_err();
    assert!(err.reason.contains("no fallback"));

    std::fs::write(&path, "cucumber\n").unwrap();
    let session = pending.start().expect("Retry should start the round");
    assert_eq!(session.root_word().as_str(), "cucumber");
    assert_eq!(session.round(), 1);
}
