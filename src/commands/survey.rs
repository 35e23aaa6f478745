//! Survey command
//!
//! Measures how much every root word in a list has to offer.

use super::hints::find_words;
use crate::dictionary::WordListDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Playable words for a single root word
#[derive(Debug, Clone)]
pub struct SurveyEntry {
    pub root_word: String,
    pub playable: usize,
    pub max_score: i64,
    pub longest: Option<String>,
}

/// Statistics over a whole root-word list
#[derive(Debug)]
pub struct SurveyResult {
    /// Richest root words first
    pub entries: Vec<SurveyEntry>,
    pub duration: Duration,
}

impl SurveyResult {
    #[must_use]
    pub fn average_playable(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let total: usize = self.entries.iter().map(|e| e.playable).sum();
        total as f64 / self.entries.len() as f64
    }

    #[must_use]
    pub fn richest(&self) -> Option<&SurveyEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn poorest(&self) -> Option<&SurveyEntry> {
        self.entries.last()
    }
}

/// Survey `root_words`, stopping after `limit` entries if given
#[must_use]
pub fn run_survey(
    root_words: &[String],
    dictionary: &WordListDictionary,
    language: &str,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyResult {
    let roots: Vec<&String> = root_words
        .iter()
        .take(limit.unwrap_or(root_words.len()))
        .collect();

    let pb = if show_progress {
        ProgressBar::new(roots.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut entries = Vec::with_capacity(roots.len());

    for root in roots {
        pb.set_message(root.clone());
        let hints = find_words(root, &[], dictionary, language);
        entries.push(SurveyEntry {
            root_word: root.clone(),
            playable: hints.len(),
            max_score: hints.max_score,
            longest: hints.words.first().cloned(),
        });
        pb.inc(1);
    }

    pb.finish_and_clear();

    entries.sort_by(|a, b| {
        b.max_score
            .cmp(&a.max_score)
            .then_with(|| a.root_word.cmp(&b.root_word))
    });

    SurveyResult {
        entries,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new("en", ["silk", "worm", "milk", "ball", "loon", "snob"])
    }

    fn roots() -> Vec<String> {
        vec!["silkworm".to_string(), "balloons".to_string(), "zzz".to_string()]
    }

    #[test]
    fn survey_ranks_root_words() {
        let result = run_survey(&roots(), &dictionary(), "en", None, false);

        assert_eq!(result.entries.len(), 3);
        let richest = result.richest().unwrap();
        assert_eq!(richest.root_word, "balloons");
        assert_eq!(richest.playable, 3);
        assert_eq!(richest.max_score, 12);

        let poorest = result.poorest().unwrap();
        assert_eq!(poorest.root_word, "zzz");
        assert_eq!(poorest.playable, 0);
        assert!(poorest.longest.is_none());
    }

    #[test]
    fn survey_respects_limit() {
        let result = run_survey(&roots(), &dictionary(), "en", Some(1), false);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].root_word, "silkworm");
    }

    #[test]
    fn average_playable() {
        let result = run_survey(&roots(), &dictionary(), "en", None, false);
        assert!((result.average_playable() - 2.0).abs() < f64::EPSILON);

        let empty = run_survey(&[], &dictionary(), "en", None, false);
        assert!(empty.average_playable().abs() < f64::EPSILON);
    }
}
