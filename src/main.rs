use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rusty_qa::config::Config;
use rusty_qa::{Answerer, Corpus, QaError, StopWords, Tokenizer};

/// RustyQA — Answer questions from a folder of text documents.
///
/// Ranks documents by TF-IDF, then prints the most relevant sentences
/// of the best documents, one per line.
#[derive(Parser)]
#[command(name = "rusty_qa")]
#[command(version = "0.1.0")]
#[command(about = "Answer questions from local text documents using TF-IDF", long_about = None)]
struct Cli {
    /// Directory containing the `.txt` documents
    #[arg(value_name = "CORPUS")]
    corpus: PathBuf,

    /// Question to ask; read from stdin when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Number of documents to draw sentences from [env: FILE_MATCHES]
    #[arg(long, value_name = "N")]
    files: Option<usize>,

    /// Number of sentences to print [env: SENTENCE_MATCHES]
    #[arg(long, value_name = "N")]
    sentences: Option<usize>,

    /// Stopword list, one word per line [env: STOPWORDS_FILE]
    #[arg(long, value_name = "PATH")]
    stopwords: Option<PathBuf>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();

    let stopwords = match cli.stopwords.or(config.stopwords_file) {
        Some(path) => StopWords::load(&path)?,
        None => StopWords::english(),
    };
    let tokenizer = Tokenizer::new(stopwords);

    let corpus = Corpus::load(&cli.corpus, &tokenizer)
        .with_context(|| format!("Failed to load corpus '{}'", cli.corpus.display()))?;

    let question = match cli.query {
        Some(question) => question,
        None => prompt("Query: ")?,
    };

    let answerer = Answerer::new(corpus, tokenizer).with_matches(
        cli.files.unwrap_or(config.file_matches),
        cli.sentences.unwrap_or(config.sentence_matches),
    );

    let answer = answerer.answer(&question);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for sentence in &answer.sentences {
        writeln!(out, "{}", sentence)?;
    }

    Ok(())
}

/// Print `label` to stderr and read one line from stdin.
fn prompt(label: &str) -> Result<String, QaError> {
    eprint!("{}", label);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
