//! Word-level tokenizer for TF-IDF scoring.
//!
//! Splits on Unicode word boundaries (UAX #29), lowercases everything, drops
//! punctuation-only units and removes stopwords. Contractions like "don't"
//! stay a single unit, which is how the word boundary rules define them.

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::StopWords;

/// Normalizes raw text into an ordered sequence of index-able terms.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    stopwords: StopWords,
}

impl Tokenizer {
    pub fn new(stopwords: StopWords) -> Self {
        Tokenizer { stopwords }
    }

    /// Tokenize text into lowercase terms, in source order.
    ///
    /// Duplicates are preserved so callers can count occurrences.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|unit| unit.chars().any(char::is_alphanumeric))
            .map(normalize)
            .filter(|term| !self.stopwords.contains(term))
            .collect()
    }

    /// Tokenize a query into its set of unique terms.
    pub fn query(&self, text: &str) -> Query {
        Query {
            terms: self.tokenize(text).into_iter().collect(),
        }
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(StopWords::english())
    }
}

/// Lowercase a word unit, folding the typographic apostrophe to ASCII.
fn normalize(unit: &str) -> String {
    unit.to_lowercase().replace('\u{2019}', "'")
}

/// A query: the set of normalized terms, order and duplicates discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Query {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}
