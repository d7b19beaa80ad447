//! Tests for loading game configuration from disk.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use word_scramble::{GameConfig, GameSession, RootWordProvider, WordListDictionary};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_from_file() {
    let file = config_file(
        r#"
        word_list = "roots.txt"
        dictionary = "english.txt"
        min_length = 4
        "#,
    );
    let config = GameConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(config.word_list(), &PathBuf::from("roots.txt"));
    assert_eq!(config.dictionary(), &PathBuf::from("english.txt"));
    assert_eq!(*config.min_length(), 4);
    assert_eq!(config.language().code(), "en");
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = config_file("min_length = \"three\"");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_config_drives_a_session() {
    let roots = config_file("silkworm\n");
    let words = config_file("silk\nworm\nmilk\n");
    let file = config_file(&format!(
        "word_list = {:?}\ndictionary = {:?}\nmin_length = 4\n",
        roots.path().display().to_string(),
        words.path().display().to_string(),
    ));

    let config = GameConfig::from_file(file.path()).unwrap();
    let provider =
        RootWordProvider::from_path(config.word_list(), config.fallback_word().clone());
    let dictionary =
        WordListDictionary::load(config.language().clone(), config.dictionary()).unwrap();
    let mut session =
        GameSession::with_seed(provider, dictionary, config.session_settings(), 0).unwrap();

    assert_eq!(session.root_word().as_str(), "silkworm");
    assert!(session.submit("milk").is_accepted());
    assert!(!session.submit("ilk").is_accepted());
}
