use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use passage_core::config::RetrievalConfig;
use passage_core::corpus::Corpus;
use passage_core::selection::PassageRetriever;

#[derive(Parser)]
#[command(name = "passage", about = "Answer a question with the best-matching sentence of a corpus")]
struct Args {
    /// Directory containing the corpus (*.txt files)
    corpus: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("passage_core=warn,passage=warn")),
        )
        .init();

    let config = RetrievalConfig::from_env().context("invalid retrieval configuration")?;

    let corpus = Corpus::load_dir(&args.corpus)
        .with_context(|| format!("failed to load corpus from {}", args.corpus.display()))?;
    tracing::info!(
        documents = corpus.len(),
        version = corpus.version(),
        "Loaded corpus"
    );

    let retriever = PassageRetriever::default().with_config(config);
    let indexed = retriever.index(&corpus);

    print!("Query: ");
    io::stdout().flush()?;
    let mut raw_query = String::new();
    io::stdin().lock().read_line(&mut raw_query)?;

    let result = retriever.answer(&indexed, raw_query.trim_end())?;
    tracing::debug!(report = %serde_json::to_string(&result.retrieval)?, "Answered query");

    for passage in &result.passages {
        println!("{}", passage.text);
    }

    Ok(())
}
