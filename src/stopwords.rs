//! Stopword sets for the tokenizer.
//!
//! The tokenizer never consults global state: a `StopWords` value is built
//! once (from the built-in English list, a file, or a fixture) and handed to
//! it explicitly.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{QaError, Result};

/// Common English function words.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A fixed set of lowercase terms the tokenizer drops.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// An empty set; every word survives tokenization.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        StopWords { words }
    }

    /// Load a stopword list with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| QaError::StopWordsAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Ok(Self::from_words(words))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_list() {
        let stop = StopWords::english();
        assert_eq!(stop.len(), 179);
        assert!(stop.contains("the"));
        assert!(stop.contains("don't"));
        assert!(!stop.contains("cat"));
    }

    #[test]
    fn test_none_is_empty() {
        assert!(StopWords::none().is_empty());
        assert!(!StopWords::none().contains("the"));
    }

    #[test]
    fn test_from_words_lowercases() {
        let stop = StopWords::from_words(["The", " AND ", ""]);
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "foo").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Bar").unwrap();

        let stop = StopWords::load(file.path()).unwrap();
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("foo"));
        assert!(stop.contains("bar"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StopWords::load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, QaError::StopWordsAccess { .. }));
    }
}
