//! Game session state and submission handling
//!
//! A `GameSession` owns everything one playthrough needs: the root word, the
//! words found so far (most recent first) and the running score. It is only
//! ever changed through `submit` and `restart`.

use super::rules::{self, DEFAULT_LANGUAGE, RejectionReason, normalize, word_length};
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Root word used when the word list is empty
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The normalized word was added to the session
    Accepted(String),
    /// The word broke a rule and `penalty` points were deducted
    Rejected {
        reason: RejectionReason,
        penalty: i64,
    },
}

impl ValidationResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// How much this outcome changed the score
    #[must_use]
    pub fn score_delta(&self) -> i64 {
        match self {
            Self::Accepted(word) => points(word),
            Self::Rejected { penalty, .. } => -penalty,
        }
    }
}

/// Points a word is worth, and the penalty for rejecting it
#[must_use]
pub fn points(word: &str) -> i64 {
    i64::try_from(word_length(word)).unwrap_or(i64::MAX)
}

/// Pick a root word uniformly at random
///
/// Falls back to [`DEFAULT_ROOT_WORD`] when `words` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::core::{DEFAULT_ROOT_WORD, choose_root_word};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let empty: [&str; 0] = [];
/// assert_eq!(choose_root_word(&empty, &mut rng), DEFAULT_ROOT_WORD);
/// assert_eq!(choose_root_word(&["balloons"], &mut rng), "balloons");
/// ```
pub fn choose_root_word<S, R>(words: &[S], rng: &mut R) -> String
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let chosen = words.choose(rng).map_or(DEFAULT_ROOT_WORD, AsRef::as_ref);
    normalize(chosen)
}

/// One playthrough: root word, found words and score
#[derive(Debug, Clone)]
pub struct GameSession<D> {
    root_word: String,
    used_words: Vec<String>,
    score: i64,
    language: String,
    dictionary: D,
}

impl<D: Dictionary> GameSession<D> {
    /// Start a session with a fixed root word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{GameSession, ValidationResult};
    ///
    /// let real = |word: &str, _: &str| word == "silk";
    /// let mut session = GameSession::new("silkworm", real);
    ///
    /// assert_eq!(session.submit("Silk"), ValidationResult::Accepted("silk".to_string()));
    /// assert_eq!(session.score(), 4);
    /// ```
    pub fn new(root_word: impl AsRef<str>, dictionary: D) -> Self {
        Self {
            root_word: normalize(root_word.as_ref()),
            used_words: Vec::new(),
            score: 0,
            language: DEFAULT_LANGUAGE.to_string(),
            dictionary,
        }
    }

    /// Start a session with a root word picked at random from `words`
    pub fn new_game<S, R>(words: &[S], dictionary: D, rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let session = Self::new(choose_root_word(words, rng), dictionary);
        tracing::info!(root_word = %session.root_word, "new game");
        session
    }

    /// Use a different language tag for dictionary lookups
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Throw away progress and pick a new root word
    ///
    /// The dictionary and language are kept.
    pub fn restart<S, R>(&mut self, words: &[S], rng: &mut R)
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.root_word = choose_root_word(words, rng);
        self.used_words.clear();
        self.score = 0;
        tracing::info!(root_word = %self.root_word, "restarted game");
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Run the rules against `raw_input` without touching the session
    ///
    /// # Errors
    ///
    /// Returns the first rule the normalized input breaks.
    pub fn check(&self, raw_input: &str) -> Result<String, RejectionReason> {
        let word = normalize(raw_input);
        rules::check(
            &word,
            &self.root_word,
            &self.used_words,
            &self.dictionary,
            &self.language,
        )?;
        Ok(word)
    }

    /// Validate a submission and update history and score
    ///
    /// Accepted words go to the front of the history and add their length to
    /// the score. Rejected words subtract their normalized length.
    pub fn submit(&mut self, raw_input: &str) -> ValidationResult {
        match self.check(raw_input) {
            Ok(word) => {
                self.score = self.score.saturating_add(points(&word));
                tracing::debug!(word = %word, score = self.score, "accepted");
                self.used_words.insert(0, word.clone());
                ValidationResult::Accepted(word)
            }
            Err(reason) => {
                let penalty = points(&normalize(raw_input));
                self.score = self.score.saturating_sub(penalty);
                tracing::debug!(
                    input = raw_input,
                    ?reason,
                    penalty,
                    score = self.score,
                    "rejected"
                );
                ValidationResult::Rejected { reason, penalty }
            }
        }
    }
}
