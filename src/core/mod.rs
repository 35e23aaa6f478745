//! Core game logic
//!
//! The session, its submission rules and the letter multiset they rely on.
//! Nothing here does I/O; the dictionary is reached through the
//! `Dictionary` trait.

mod letters;
mod rules;
mod session;

pub use letters::LetterPool;
pub use rules::{
    Alert, DEFAULT_LANGUAGE, MIN_WORD_LENGTH, RejectionReason, check, is_derivable,
    is_long_enough, is_not_root, is_original, normalize, word_length,
};
pub use session::{DEFAULT_ROOT_WORD, GameSession, ValidationResult, choose_root_word, points};
