//! Stop word filtering
//!
//! Stop words come from a comma separated file (`stop_words.txt` by default).
//! A missing file is a configuration error, never an empty list.

use crate::error::{Result, TermFreqError};
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// A set of words excluded from counting
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    /// Lowercased stop words
    words: FxHashSet<String>,
}

impl StopWords {
    /// Load a comma separated stop word file
    pub fn load(path: impl AsRef<Path>) -> Result<StopWords> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TermFreqError::Config(format!("Unable to load stop words from {}: {}", path.display(), e))
        })?;
        let stop_words = StopWords::parse(&contents);
        debug!("Loaded {} stop words from {}", stop_words.len(), path.display());
        Ok(stop_words)
    }

    /// Parse the comma separated stop word format
    pub fn parse(contents: &str) -> StopWords {
        let words = contents
            .split(',')
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        StopWords { words }
    }

    /// Create a stop word set from a custom list
    #[cfg(test)]
    pub fn from_list(words: &[&str]) -> StopWords {
        StopWords {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check if a token is excluded. Single letters always are.
    pub fn is_stop_word(&self, token: &str) -> bool {
        is_single_letter(token) || self.words.contains(token)
    }

    /// Tokens that are not stop words, in their original order
    pub fn filter<'a, I>(&'a self, tokens: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'a,
    {
        tokens.into_iter().filter(move |token| !self.is_stop_word(token))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_comma_separated_list() {
        let stop_words = StopWords::parse("a,able,about,\nThe , ,across\n");
        assert_eq!(stop_words.len(), 5);
        assert!(stop_words.is_stop_word("the"));
        assert!(stop_words.is_stop_word("about"));
        assert!(stop_words.is_stop_word("across"));
        assert!(!stop_words.is_stop_word("cat"));
    }

    #[test]
    fn single_letters_are_always_stop_words() {
        let stop_words = StopWords::default();
        assert!(stop_words.is_empty());
        assert!(stop_words.is_stop_word("s"));
        assert!(stop_words.is_stop_word("é"));
        assert!(!stop_words.is_stop_word("7"));
        assert!(!stop_words.is_stop_word("st"));
    }

    #[test]
    fn filter_keeps_order_of_remaining_tokens() {
        let stop_words = StopWords::from_list(&["The", "and"]);
        let tokens = vec!["the", "cat", "and", "s", "the", "hat"].into_iter().map(String::from).collect::<Vec<_>>();
        let kept: Vec<String> = stop_words.filter(tokens).collect();
        assert_eq!(kept, vec!["cat", "hat"]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "the,and,of").unwrap();
        let stop_words = StopWords::load(file.path()).unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.is_stop_word("of"));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StopWords::load(dir.path().join("stop_words.txt"));
        assert!(matches!(result, Err(TermFreqError::Config(_))));
    }
}
