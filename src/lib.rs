//! RustyQA — extractive question answering over a folder of text documents.
//!
//! A query first narrows the corpus to the best documents by TF-IDF, then the
//! best sentences of those documents are returned as the answer.

pub mod config;
pub mod corpus;
pub mod error;
pub mod idf;
pub mod qa;
pub mod rank;
pub mod segment;
pub mod stopwords;
pub mod tokenizer;

pub use corpus::Corpus;
pub use error::{QaError, Result};
pub use idf::{compute_idfs, IdfTable};
pub use qa::{Answer, Answerer};
pub use rank::{top_files, top_sentences};
pub use stopwords::StopWords;
pub use tokenizer::{Query, Tokenizer};
