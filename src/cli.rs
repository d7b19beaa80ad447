//! Command-line interface for word_scramble.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Word Scramble - spell new words from the letters of a root word
#[derive(Parser, Debug)]
#[command(name = "word_scramble")]
#[command(about = "Word-building game: spell new words from a root word", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Options shared by every subcommand
    #[command(flatten)]
    pub game: GameArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "word_scramble.toml")]
    pub config: PathBuf,

    /// Override the root word list (newline-separated words)
    #[arg(long, global = true)]
    pub word_list: Option<PathBuf>,

    /// Override the dictionary word file (newline-separated words)
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Override the dictionary language code
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Disable the fallback root word
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Seed for root word selection (deterministic rounds)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Submit words non-interactively and print each outcome
    Check {
        /// Use this root word instead of drawing one from the word list
        #[arg(long)]
        root: Option<String>,

        /// Candidate words, submitted in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}
