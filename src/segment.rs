use std::collections::BTreeMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::tokenizer::Tokenizer;

/// Splits text into sentence-level strings.
///
/// The text is first cut into passages on newlines, then each passage is
/// split on Unicode sentence boundaries (UAX #29). Sentences are trimmed;
/// fragments without any alphanumeric content are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the candidate sentence set: sentence text → tokens.
///
/// Sentences whose tokens are all stopwords or punctuation are discarded.
/// Identical sentence strings collapse into a single entry.
pub fn sentence_tokens<I, S>(tokenizer: &Tokenizer, sentences: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut candidates = BTreeMap::new();
    for sentence in sentences {
        let sentence = sentence.into();
        let tokens = tokenizer.tokenize(&sentence);
        if !tokens.is_empty() {
            candidates.insert(sentence, tokens);
        }
    }
    candidates
}
