//! Document and sentence ranking.
//!
//! Documents are scored by TF-IDF:
//!   score(D, Q) = Σ_{t ∈ Q ∩ D} count(t, D) × IDF(t)
//!
//! Sentences are scored by a (matching-word measure, query term density) pair:
//!   measure(S, Q) = Σ_{t ∈ Q ∩ S} IDF(t)
//!   density(S, Q) = |{tokens of S that are in Q}| / |S|
//!
//! Scoring runs per item on rayon's thread pool. Ordering is decided by an
//! explicit comparator after collection, so results never depend on map or
//! thread ordering. Ties fall back to the item identifier, ascending.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use tracing::debug;

use crate::idf::IdfTable;
use crate::tokenizer::Query;

/// TF-IDF score of one document against a query.
///
/// Query terms missing from the document or from `idfs` contribute 0.
pub fn document_score(query: &Query, tokens: &[String], idfs: &IdfTable) -> f64 {
    let mut tf: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if query.contains(token) {
            *tf.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    tf.into_iter()
        .map(|(term, count)| count as f64 * idfs.weight(term))
        .sum()
}

/// Return the identifiers of the `n` documents that best match `query`.
///
/// Every document is a candidate; zero-scoring documents fill the list when
/// fewer than `n` documents match.
pub fn top_files(
    query: &Query,
    files: &BTreeMap<String, Vec<String>>,
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let mut scores: Vec<(&str, f64)> = files
        .par_iter()
        .map(|(name, tokens)| (name.as_str(), document_score(query, tokens, idfs)))
        .collect();

    scores.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    scores.truncate(n);

    debug!(
        "Top files: {}",
        scores
            .iter()
            .map(|(name, score)| format!("{name}={score:.4}"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    scores.into_iter().map(|(name, _)| name.to_string()).collect()
}

/// Ranking key of a sentence. Compared lexicographically: measure first,
/// then density.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SentenceScore {
    /// Sum of IDF weights of the distinct query terms in the sentence.
    pub measure: f64,
    /// Fraction of the sentence's tokens that are query terms.
    pub density: f64,
}

impl SentenceScore {
    /// Descending order: the better score sorts first.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .measure
            .total_cmp(&self.measure)
            .then_with(|| other.density.total_cmp(&self.density))
    }
}

/// Score one sentence against a query.
///
/// Density counts token-level occurrences, so a query term never matches
/// inside a longer word.
pub fn sentence_score(query: &Query, tokens: &[String], idfs: &IdfTable) -> SentenceScore {
    if tokens.is_empty() {
        return SentenceScore::default();
    }

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if query.contains(token) {
            *occurrences.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let measure: f64 = occurrences.keys().map(|term| idfs.weight(term)).sum();
    let matched: usize = occurrences.values().sum();

    SentenceScore {
        measure,
        density: matched as f64 / tokens.len() as f64,
    }
}

/// Return the `n` sentences that best match `query`.
///
/// `idfs` must be computed over exactly `sentences`.
pub fn top_sentences(
    query: &Query,
    sentences: &BTreeMap<String, Vec<String>>,
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let mut scores: Vec<(&str, SentenceScore)> = sentences
        .par_iter()
        .map(|(text, tokens)| (text.as_str(), sentence_score(query, tokens, idfs)))
        .collect();

    scores.sort_by(|a, b| a.1.rank_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    scores.truncate(n);

    for (rank, (text, score)) in scores.iter().enumerate() {
        debug!(
            rank = rank + 1,
            measure = score.measure,
            density = score.density,
            "{text}"
        );
    }

    scores.into_iter().map(|(text, _)| text.to_string()).collect()
}
