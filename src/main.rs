//! Word Scramble - Unified CLI
//!
//! Interactive terminal game plus a scriptable `check` mode.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    App, GameConfig, Language, PendingSession, RootWord, RootWordProvider, SubmitOutcome,
    WordList, WordListDictionary, run_tui,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli.game)?;

    match cli.command {
        Command::Play => {
            initialize_file_tracing(config.log_file())?;
            // A missing word list is shown in the UI and retried from there.
            let pending = build_session(&config, None, cli.game.seed)?;
            run_tui(App::from_start(pending.start()))
        }
        Command::Check { root, words } => {
            initialize_stderr_tracing();
            run_check(&config, root, cli.game.seed, &words)
        }
    }
}

/// Logs to a file so the terminal UI stays clean.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,word_scramble=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    info!("File tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the config file and applies command-line overrides.
#[instrument(skip(args), fields(config_path = %args.config.display()))]
fn load_config(args: &GameArgs) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;

    if let Some(path) = &args.word_list {
        info!(path = %path.display(), "Overriding word list");
        config = config.with_word_list(path.clone());
    }
    if let Some(path) = &args.dictionary {
        info!(path = %path.display(), "Overriding dictionary");
        config = config.with_dictionary(path.clone());
    }
    if let Some(language) = &args.language {
        info!(%language, "Overriding language");
        config = config.with_language(Language::new(language.clone()));
    }
    if args.no_fallback {
        info!("Fallback root word disabled");
        config = config.without_fallback();
    }

    Ok(config)
}

/// Collects the parts of a session from config. `root` pins the root word.
#[instrument(skip(config))]
fn build_session(
    config: &GameConfig,
    root: Option<String>,
    seed: Option<u64>,
) -> Result<PendingSession> {
    let provider = match root {
        Some(root) => {
            let root = RootWord::new(root)?;
            RootWordProvider::new(WordList::new(vec![root]), None)
        }
        None => RootWordProvider::from_path(config.word_list(), config.fallback_word().clone()),
    };

    let dictionary = WordListDictionary::load(config.language().clone(), config.dictionary())
        .context("Failed to load dictionary")?;

    let settings = config.session_settings();
    Ok(match seed {
        Some(seed) => PendingSession::with_seed(provider, dictionary, settings, seed),
        None => PendingSession::with_entropy(provider, dictionary, settings),
    })
}

/// Submits each word in order and prints one line per outcome.
#[instrument(skip(config, words))]
fn run_check(
    config: &GameConfig,
    root: Option<String>,
    seed: Option<u64>,
    words: &[String],
) -> Result<()> {
    let mut session = build_session(config, root, seed)?
        .start()
        .map_err(|(_, e)| e)
        .context("Failed to start a round")?;
    println!("root: {}", session.root_word());

    for raw in words {
        match session.submit(raw) {
            SubmitOutcome::Ignored => println!("{:?}: ignored", raw),
            SubmitOutcome::Accepted { word, score } => {
                println!("{}: accepted (score {})", word, score)
            }
            SubmitOutcome::Rejected(rejection) => {
                println!("{}: rejected ({})", rejection.word(), rejection.reason())
            }
        }
    }

    println!(
        "score: {} ({} words)",
        session.score(),
        session.used_words().len()
    );
    Ok(())
}
