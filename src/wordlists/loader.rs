//! Word list loading utilities
//!
//! Loads newline-separated word lists from disk. A missing file is a startup
//! failure the caller cannot play past, so it gets its own error variant.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to load a word list
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    /// The backing file does not exist
    #[error("word list not found: {}", path.display())]
    ResourceMissing { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read every non-blank line of a file, trimmed and lowercased
///
/// # Errors
///
/// Returns `WordSourceError::ResourceMissing` if the file does not exist,
/// or `WordSourceError::Io` for any other read failure.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WordSourceError::ResourceMissing {
                path: path.to_path_buf(),
            }
        } else {
            WordSourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(words_from_text(&content))
}

/// Load root words from a file
///
/// # Errors
///
/// Returns `WordSourceError::ResourceMissing` if the file does not exist,
/// or `WordSourceError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::load_root_words;
///
/// let words = load_root_words("data/start.txt").unwrap();
/// println!("Loaded {} root words", words.len());
/// ```
pub fn load_root_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSourceError> {
    let words = load_words(&path)?;
    tracing::info!(
        path = %path.as_ref().display(),
        count = words.len(),
        "loaded root words"
    );
    Ok(words)
}

/// Split newline-separated text into words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_text;
///
/// let words = words_from_text("Silkworm\r\n\nballoons\n");
/// assert_eq!(words, vec!["silkworm", "balloons"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{name}_{}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("silkworm\n\n   \nballoons\n");
        assert_eq!(words, vec!["silkworm", "balloons"]);
    }

    #[test]
    fn words_from_text_trims_and_lowercases() {
        let words = words_from_text("  SilkWorm  \r\nBALLOONS");
        assert_eq!(words, vec!["silkworm", "balloons"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["silkworm", "balloons"]);
        assert_eq!(words, vec!["silkworm", "balloons"]);
    }

    #[test]
    fn load_root_words_from_file() {
        let path = temp_file("roots", "silkworm\nballoons\n");
        let words = load_root_words(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["silkworm", "balloons"]);
    }

    #[test]
    fn load_missing_file_is_resource_missing() {
        let result = load_root_words("/definitely/not/here/start.txt");

        match result {
            Err(WordSourceError::ResourceMissing { path }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/start.txt"));
            }
            other => panic!("expected ResourceMissing, got {other:?}"),
        }
    }

    #[test]
    fn resource_missing_message_names_the_path() {
        let error = WordSourceError::ResourceMissing {
            path: PathBuf::from("start.txt"),
        };
        assert_eq!(error.to_string(), "word list not found: start.txt");
    }
}
