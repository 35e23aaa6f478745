//! Batch check command
//!
//! Plays a fixed list of submissions against one root word and records how
//! each one was scored.

use crate::core::{GameSession, ValidationResult};
use crate::dictionary::Dictionary;

/// One submission and the score right after it
#[derive(Debug, Clone)]
pub struct CheckStep {
    pub input: String,
    pub result: ValidationResult,
    pub score: i64,
}

/// Result of playing a batch of submissions
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    pub final_score: i64,
    /// Accepted words, most recent first
    pub used_words: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.steps.iter().filter(|s| s.result.is_accepted()).count()
    }

    #[must_use]
    pub fn rejected(&self) -> usize {
        self.steps.len() - self.accepted()
    }
}

/// Submit every input in order to a fresh session
///
/// # Examples
/// ```
/// use word_scramble::commands::run_check;
/// use word_scramble::core::GameSession;
///
/// let session = GameSession::new("silkworm", |word: &str, _: &str| word == "silk");
/// let result = run_check(session, &["silk", "xy"]);
///
/// assert_eq!(result.accepted(), 1);
/// assert_eq!(result.final_score, 2);
/// ```
pub fn run_check<D, S>(mut session: GameSession<D>, inputs: &[S]) -> CheckResult
where
    D: Dictionary,
    S: AsRef<str>,
{
    let steps = inputs
        .iter()
        .map(|input| {
            let result = session.submit(input.as_ref());
            CheckStep {
                input: input.as_ref().to_string(),
                result,
                score: session.score(),
            }
        })
        .collect();

    CheckResult {
        root_word: session.root_word().to_string(),
        steps,
        final_score: session.score(),
        used_words: session.used_words().to_vec(),
    }
}
