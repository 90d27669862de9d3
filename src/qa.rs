use tracing::debug;

use crate::corpus::Corpus;
use crate::idf::compute_idfs;
use crate::rank::{top_files, top_sentences};
use crate::segment::{sentence_tokens, split_sentences};
use crate::tokenizer::Tokenizer;

/// Number of documents to narrow the corpus to.
pub const FILE_MATCHES: usize = 3;

/// Number of sentences to return as the answer.
pub const SENTENCE_MATCHES: usize = 3;

/// Result of answering one query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Answer {
    /// Best-matching document names, best first.
    pub files: Vec<String>,
    /// Best-matching sentences drawn from `files`, best first.
    pub sentences: Vec<String>,
}

/// Answers free-text queries against a loaded corpus.
///
/// Holds only read-only state, so one instance can answer any number of
/// queries and the same query always yields the same answer.
#[derive(Clone, Debug)]
pub struct Answerer {
    corpus: Corpus,
    tokenizer: Tokenizer,
    file_matches: usize,
    sentence_matches: usize,
}

impl Answerer {
    pub fn new(corpus: Corpus, tokenizer: Tokenizer) -> Self {
        Answerer {
            corpus,
            tokenizer,
            file_matches: FILE_MATCHES,
            sentence_matches: SENTENCE_MATCHES,
        }
    }

    /// Override how many documents and sentences each answer uses.
    pub fn with_matches(mut self, file_matches: usize, sentence_matches: usize) -> Self {
        self.file_matches = file_matches;
        self.sentence_matches = sentence_matches;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Answer a query.
    ///
    /// Pipeline: Tokenize query → Rank documents → Segment top documents →
    /// Recompute IDF over their sentences → Rank sentences.
    pub fn answer(&self, question: &str) -> Answer {
        let query = self.tokenizer.query(question);
        debug!(
            "Query terms: {}",
            query.terms().collect::<Vec<_>>().join(" ")
        );

        if self.corpus.is_empty() {
            return Answer::default();
        }

        let files = top_files(
            &query,
            self.corpus.tokens(),
            self.corpus.idfs(),
            self.file_matches,
        );

        let passages = files
            .iter()
            .filter_map(|name| self.corpus.text(name))
            .flat_map(split_sentences);
        let sentences = sentence_tokens(&self.tokenizer, passages);
        debug!(
            "{} candidate sentences from {} documents",
            sentences.len(),
            files.len()
        );

        // Sentence IDF is scoped to the candidate set only.
        let idfs = compute_idfs(&sentences);
        let sentences = top_sentences(&query, &sentences, &idfs, self.sentence_matches);

        Answer { files, sentences }
    }
}
