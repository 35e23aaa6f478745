//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: find words hidden in a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{find_words, run_check, run_simple, run_survey},
    core::{DEFAULT_LANGUAGE, GameSession},
    dictionary::WordListDictionary,
    output::{print_check_result, print_hints, print_survey},
    wordlists::{ROOT_WORDS, load_root_words, loader::words_from_slice},
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

    /// Root words: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Dictionary: 'embedded' (default) or path to a newline-separated file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language tag used for dictionary lookups
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for picking root words (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one word per line, without TUI)
    Simple,

    /// Submit a list of words and show how each one scores
    Check {
        /// Root word to play against (random if omitted)
        #[arg(short, long)]
        root: Option<String>,

        /// Words to submit, in order
        words: Vec<String>,
    },

    /// List every playable word for a root word
    Hints {
        /// The root word
        root: String,
    },

    /// Rank the root-word list by how many words each one holds
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it only logs when a file is given.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None if !tui => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        None => {}
    }

    Ok(())
}

/// Load root words based on the -w flag
fn load_words(source: &str) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(words_from_slice(ROOT_WORDS)),
        path => load_root_words(path)
            .with_context(|| format!("could not load root words from '{path}'")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(source: &str, language: &str) -> Result<WordListDictionary> {
    match source {
        "embedded" => Ok(WordListDictionary::embedded()),
        path => WordListDictionary::load(path, language)
            .with_context(|| format!("could not load dictionary from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    // A missing word list or dictionary is fatal: there is no game to play without them
    let root_words = load_words(&cli.words)?;
    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match command {
        Commands::Play => {
            let session = GameSession::new_game(&root_words, dictionary, &mut rng)
                .with_language(&cli.language);
            run_play_command(session, &root_words, rng)
        }
        Commands::Simple => {
            let mut session = GameSession::new_game(&root_words, dictionary, &mut rng)
                .with_language(&cli.language);
            run_simple(&mut session, &root_words, &mut rng).context("simple mode failed")
        }
        Commands::Check { root, words } => {
            let session = match root {
                Some(root) => GameSession::new(root, dictionary),
                None => GameSession::new_game(&root_words, dictionary, &mut rng),
            }
            .with_language(&cli.language);
            print_check_result(&run_check(session, &words));
            Ok(())
        }
        Commands::Hints { root } => {
            let root = word_scramble::core::normalize(&root);
            print_hints(&find_words(&root, &[], &dictionary, &cli.language));
            Ok(())
        }
        Commands::Survey { limit } => {
            println!("🎯 Surveying root words...");
            let result = run_survey(&root_words, &dictionary, &cli.language, limit, true);
            print_survey(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    session: GameSession<WordListDictionary>,
    root_words: &[String],
    rng: StdRng,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(session, root_words, rng);
    run_tui(app)
}
