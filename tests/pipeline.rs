use std::collections::BTreeMap;
use std::fs;

use rusty_qa::segment::sentence_tokens;
use rusty_qa::{
    compute_idfs, top_files, top_sentences, Answerer, Corpus, QaError, StopWords, Tokenizer,
};

fn tokenized(tokenizer: &Tokenizer, docs: &[(&str, &str)]) -> BTreeMap<String, Vec<String>> {
    docs.iter()
        .map(|(name, text)| (name.to_string(), tokenizer.tokenize(text)))
        .collect()
}

#[test]
fn test_scenario_single_term_picks_matching_document() {
    let tokenizer = Tokenizer::default();
    let files = tokenized(
        &tokenizer,
        &[
            ("doc1", "the cat sat on the mat"),
            ("doc2", "the dog sat on the rug"),
        ],
    );
    let idfs = compute_idfs(&files);
    let query = tokenizer.query("cat");

    assert_eq!(top_files(&query, &files, &idfs, 1), vec!["doc1"]);
}

#[test]
fn test_scenario_all_zero_scores_use_name_order() {
    let tokenizer = Tokenizer::new(StopWords::none());
    let files = tokenized(&tokenizer, &[("doc2", "a b b b"), ("doc1", "a a a b")]);
    let idfs = compute_idfs(&files);
    assert_eq!(idfs.get("a"), Some(0.0));
    assert_eq!(idfs.get("b"), Some(0.0));

    let query = tokenizer.query("a b");
    assert_eq!(top_files(&query, &files, &idfs, 2), vec!["doc1", "doc2"]);
}

#[test]
fn test_scenario_sentence_with_rare_term_wins() {
    let tokenizer = Tokenizer::default();
    let sentences = sentence_tokens(&tokenizer, ["cats are mammals", "dogs are mammals too"]);
    assert_eq!(sentences["cats are mammals"].len(), 2);

    let idfs = compute_idfs(&sentences);
    assert!(idfs.weight("cats") > 0.0);
    assert_eq!(idfs.get("mammals"), Some(0.0));
    assert_eq!(idfs.get("are"), None);

    let query = tokenizer.query("cats");
    assert_eq!(
        top_sentences(&query, &sentences, &idfs, 1),
        vec!["cats are mammals"]
    );
}

#[test]
fn test_scenario_empty_query_returns_min_n_candidates() {
    let tokenizer = Tokenizer::default();
    let files = tokenized(
        &tokenizer,
        &[
            ("c.txt", "Gamma rays."),
            ("a.txt", "Alpha particles."),
            ("b.txt", "Beta decay."),
        ],
    );
    let idfs = compute_idfs(&files);
    let query = tokenizer.query("what is the?");
    assert!(query.is_empty());

    assert_eq!(top_files(&query, &files, &idfs, 2), vec!["a.txt", "b.txt"]);
    assert_eq!(top_files(&query, &files, &idfs, 10).len(), 3);

    let sentences = sentence_tokens(&tokenizer, ["Beta decay.", "Alpha particles."]);
    let sentence_idfs = compute_idfs(&sentences);
    assert_eq!(
        top_sentences(&query, &sentences, &sentence_idfs, 5),
        vec!["Alpha particles.", "Beta decay."]
    );
}

#[test]
fn test_end_to_end_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("python.txt"),
        "Python is an interpreted language.\nGuido van Rossum created Python in 1991.",
    )
    .unwrap();
    fs::write(
        dir.path().join("rust.txt"),
        "Rust is a systems language.\nGraydon Hoare created Rust at Mozilla. Rust 1.0 shipped in 2015.",
    )
    .unwrap();
    fs::write(
        dir.path().join("tea.txt"),
        "Green tea is steeped briefly. Black tea is oxidized.",
    )
    .unwrap();
    fs::write(dir.path().join("README.md"), "Rust Rust Rust Mozilla").unwrap();

    let tokenizer = Tokenizer::default();
    let corpus = Corpus::load(dir.path(), &tokenizer).unwrap();
    assert_eq!(corpus.len(), 3);

    let answerer = Answerer::new(corpus, tokenizer).with_matches(1, 1);
    let answer = answerer.answer("Who created Rust at Mozilla?");
    assert_eq!(answer.files, vec!["rust.txt"]);
    assert_eq!(answer.sentences, vec!["Graydon Hoare created Rust at Mozilla."]);

    assert_eq!(answerer.answer("Who created Rust at Mozilla?"), answer);
}

#[test]
fn test_missing_corpus_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Corpus::load(dir.path().join("absent"), &Tokenizer::default()).unwrap_err();
    assert!(matches!(err, QaError::CorpusNotFound(_)));
}
