//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//! Each accepted word scores its length; each rejected one costs its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{GameSession, RejectionReason, ValidationResult};
//! use word_scramble::dictionary::WordListDictionary;
//!
//! let dictionary = WordListDictionary::new("en", ["silk", "worm"]);
//! let mut session = GameSession::new("silkworm", dictionary);
//!
//! assert_eq!(session.submit("silk"), ValidationResult::Accepted("silk".to_string()));
//! assert_eq!(session.submit("silkworm").reason(), Some(RejectionReason::IsRootWord));
//! assert_eq!(session.score(), 4 - 8);
//! ```

// Core game logic
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
