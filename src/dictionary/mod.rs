//! Dictionary oracle
//!
//! Decides whether a word is a recognized real word in a given language.
//! The game only depends on the `Dictionary` trait, so a live spell checker,
//! a word list, or a test fake can all sit behind it.

use crate::core::DEFAULT_LANGUAGE;
use crate::wordlists::{DICTIONARY, WordSourceError, loader::load_words};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Something that knows which words are real
pub trait Dictionary {
    /// Report whether `word` is a recognized word in `language`
    ///
    /// `word` is already normalized (lowercase, trimmed).
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

/// Any `Fn(word, language) -> bool` works as a dictionary
///
/// # Examples
/// ```
/// use word_scramble::dictionary::Dictionary;
///
/// let short_words_only = |word: &str, _language: &str| word.len() <= 4;
/// assert!(short_words_only.is_real_word("silk", "en"));
/// assert!(!short_words_only.is_real_word("silky", "en"));
/// ```
impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// In-memory word list for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from an iterator of words
    ///
    /// Words are trimmed and lowercased; blanks are dropped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::embedded();
    /// assert!(dictionary.is_real_word("silk", "en"));
    /// assert!(!dictionary.is_real_word("wilk", "en"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY.iter().copied())
    }

    /// Load a newline-separated word list from disk
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::ResourceMissing` if the file does not exist,
    /// or `WordSourceError::Io` if it cannot be read.
    pub fn load<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, WordSourceError> {
        let words = load_words(path)?;
        let dictionary = Self::new(language, words);
        tracing::info!(
            words = dictionary.len(),
            language = %dictionary.language,
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn word_list_lookup() {
        let dictionary = WordListDictionary::new("en", ["silk", "worm", "milk"]);
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.is_real_word("silk", "en"));
        assert!(!dictionary.is_real_word("wilk", "en"));
    }

    #[test]
    fn word_list_normalizes_entries() {
        let dictionary = WordListDictionary::new("en", ["  Silk ", "WORM\r", "", "   "]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_real_word("silk", "en"));
        assert!(dictionary.is_real_word("worm", "en"));
    }

    #[test]
    fn other_languages_are_not_recognized() {
        let dictionary = WordListDictionary::new("en", ["silk"]);
        assert!(dictionary.is_real_word("silk", "EN"));
        assert!(!dictionary.is_real_word("silk", "fr"));
        assert_eq!(dictionary.language(), "en");
    }

    #[test]
    fn embedded_dictionary_is_populated() {
        let dictionary = WordListDictionary::embedded();
        assert!(!dictionary.is_empty());
        assert!(dictionary.is_real_word("silkworm", "en"));
        assert!(dictionary.is_real_word("worm", "en"));
        assert!(dictionary.words().all(|word| word == word.to_lowercase()));
    }

    #[test]
    fn closure_dictionary() {
        let fake = |word: &str, _: &str| word == "silk";
        assert!(fake.is_real_word("silk", "en"));
        assert!(!fake.is_real_word("milk", "en"));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_dictionary_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "silk\nWorm\n\nmilk\n").unwrap();

        let dictionary = WordListDictionary::load(&path, "en").unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.is_real_word("worm", "en"));
    }

    #[test]
    fn load_missing_file() {
        let result = WordListDictionary::load("/definitely/not/here/words.txt", "en");
        assert!(matches!(
            result,
            Err(WordSourceError::ResourceMissing { .. })
        ));
    }
}
