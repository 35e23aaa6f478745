//! Word lists for the game
//!
//! Provides the embedded root words and dictionary, plus loaders for
//! newline-separated word files on disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::{WordSourceError, load_root_words};
