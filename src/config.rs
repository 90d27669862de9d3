use std::path::PathBuf;

use tracing::warn;

use crate::qa::{FILE_MATCHES, SENTENCE_MATCHES};

/// Runtime settings, read from the environment (and a `.env` file if present).
///
/// - `FILE_MATCHES`: documents to narrow the corpus to (default 3)
/// - `SENTENCE_MATCHES`: sentences to print (default 3)
/// - `STOPWORDS_FILE`: custom stopword list, one word per line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub file_matches: usize,
    pub sentence_matches: usize,
    pub stopwords_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_matches: FILE_MATCHES,
            sentence_matches: SENTENCE_MATCHES,
            stopwords_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        Config {
            file_matches: parse_count(&lookup, "FILE_MATCHES", defaults.file_matches),
            sentence_matches: parse_count(&lookup, "SENTENCE_MATCHES", defaults.sentence_matches),
            stopwords_file: lookup("STOPWORDS_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_count(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}: not a count, using {}", key, raw, default);
            default
        }),
    }
}
