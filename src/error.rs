use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading inputs for the question-answering pipeline.
///
/// Ranking itself never fails: empty corpora, empty queries and unknown
/// query terms all produce (possibly empty) rankings instead of errors.
#[derive(Error, Debug)]
pub enum QaError {
    /// The corpus directory does not exist.
    #[error("corpus directory not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    /// The corpus directory or one of its documents could not be read.
    #[error("failed to read corpus entry {}: {source}", .path.display())]
    CorpusAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stopword list file could not be read.
    #[error("failed to read stopword list {}: {source}", .path.display())]
    StopWordsAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The query line could not be read from the input stream.
    #[error("failed to read query: {0}")]
    QueryInput(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, QaError>;
