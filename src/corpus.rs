use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{QaError, Result};
use crate::idf::{compute_idfs, IdfTable};
use crate::tokenizer::Tokenizer;

/// Reads every `.txt` file directly inside `dir`.
///
/// Returns a map from file name to file contents. Any unreadable entry fails
/// the whole load; there is no partial corpus.
pub fn load_files(dir: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(QaError::CorpusNotFound(dir.to_path_buf()));
    }

    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir).map_err(access(dir))? {
        let entry = entry.map_err(access(dir))?;
        let path = entry.path();

        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if !is_txt || !path.is_file() {
            debug!("Skipping {}", path.display());
            continue;
        }

        let text = std::fs::read_to_string(&path).map_err(access(&path))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        files.insert(name, text);
    }

    info!("Loaded {} documents from {}", files.len(), dir.display());
    Ok(files)
}

fn access(path: &Path) -> impl FnOnce(io::Error) -> QaError {
    let path = path.to_path_buf();
    move |source| QaError::CorpusAccess { path, source }
}

/// A loaded, tokenized document collection with its IDF table.
///
/// Built once and read-only afterwards, so it can serve any number of queries.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    texts: BTreeMap<String, String>,
    tokens: BTreeMap<String, Vec<String>>,
    idfs: IdfTable,
}

impl Corpus {
    /// Tokenize `texts` in parallel and compute the corpus IDF table.
    pub fn new(texts: BTreeMap<String, String>, tokenizer: &Tokenizer) -> Self {
        let tokens: BTreeMap<String, Vec<String>> = texts
            .par_iter()
            .map(|(name, text)| (name.clone(), tokenizer.tokenize(text)))
            .collect();

        let idfs = compute_idfs(&tokens);
        debug!(
            "Corpus vocabulary: {} terms across {} documents",
            idfs.len(),
            idfs.item_count()
        );

        Corpus {
            texts,
            tokens,
            idfs,
        }
    }

    /// Load and tokenize every `.txt` file in `dir`.
    pub fn load(dir: impl AsRef<Path>, tokenizer: &Tokenizer) -> Result<Self> {
        Ok(Self::new(load_files(dir)?, tokenizer))
    }

    /// Raw text of a document.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str)
    }

    /// Document name → token sequence.
    pub fn tokens(&self) -> &BTreeMap<String, Vec<String>> {
        &self.tokens
    }

    pub fn idfs(&self) -> &IdfTable {
        &self.idfs
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
