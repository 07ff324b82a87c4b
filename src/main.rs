//! Word Scramble - CLI
//!
//! Word game with TUI and line-based modes: build words from the letters of a
//! root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_words, run_simple},
    game::{GameConfig, GameSession, Validator},
    oracle::{DEFAULT_LANGUAGE, DictionaryOracle},
    output::print_check_report,
    wordlists::{ROOT_WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list (one word per line); defaults to the built-in list
    #[arg(short = 'r', long, global = true)]
    roots: Option<PathBuf>,

    /// Dictionary file (one word per line); defaults to the built-in English list
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language passed to the spelling check
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for root word selection, for repeatable games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Check words against a root word and print each verdict
    Check {
        /// Root word to build from
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let oracle = load_dictionary(cli.dictionary.as_deref(), &cli.language)?;
    let config = GameConfig {
        language: cli.language,
        seed: cli.seed,
    };

    match command {
        Commands::Play => {
            let session = new_session(cli.roots.as_deref(), oracle, config)?;
            run_play_command(session)
        }
        Commands::Simple => {
            let mut session = new_session(cli.roots.as_deref(), oracle, config)?;
            run_simple(&mut session).context("simple mode failed")
        }
        Commands::Check { root, words } => {
            run_check_command(&root, &words, oracle, &config.language)
        }
    }
}

/// Install the tracing subscriber
///
/// Logs go to stderr. The TUI owns the terminal, so only errors are logged
/// there unless `RUST_LOG` asks for more.
fn init_logging(verbose: u8, tui: bool) {
    let default_level = match (tui, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("word_scramble={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the spelling oracle from a file, or use the embedded dictionary
fn load_dictionary(path: Option<&Path>, language: &str) -> Result<DictionaryOracle> {
    let oracle = match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load dictionary {}", path.display()))?;
            DictionaryOracle::new(language, words)
        }
        None => DictionaryOracle::embedded(),
    };

    if !oracle.language().eq_ignore_ascii_case(language) {
        warn!(
            dictionary = oracle.language(),
            requested = language,
            "dictionary language differs from requested language; no word will be accepted"
        );
    }
    info!(words = oracle.len(), language = oracle.language(), "dictionary ready");

    Ok(oracle)
}

/// Build a session from a root word file, or the embedded root words
fn new_session(
    roots: Option<&Path>,
    oracle: DictionaryOracle,
    config: GameConfig,
) -> Result<GameSession<DictionaryOracle>> {
    let root_words = match roots {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load root words {}", path.display()))?,
        None => words_from_slice(ROOT_WORDS),
    };

    GameSession::new(root_words, oracle, config).context("cannot start a game")
}

fn run_check_command(
    root: &str,
    words: &[String],
    oracle: DictionaryOracle,
    language: &str,
) -> Result<()> {
    let validator = Validator::new(oracle, language);
    let report = check_words(&validator, root, words);
    print_check_report(&report).context("failed to write check report")
}

fn run_play_command(session: GameSession<DictionaryOracle>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
