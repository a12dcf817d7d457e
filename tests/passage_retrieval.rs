use passage_core::config::RetrievalConfig;
use passage_core::corpus::Corpus;
use passage_core::document::{Document, DocumentId};
use passage_core::selection::PassageRetriever;

fn make_doc(id_str: &str, content: &str) -> Document {
    Document::ingest(DocumentId::new(id_str), content.as_bytes().to_vec()).unwrap()
}

fn sample_corpus() -> Corpus {
    Corpus::from_documents(vec![
        make_doc(
            "python.txt",
            "Python is a programming language. It was created by Guido van Rossum.\n\
             Python emphasizes code readability.",
        ),
        make_doc(
            "ai.txt",
            "Artificial intelligence is intelligence demonstrated by machines. \
             Machine learning is a subfield of artificial intelligence.",
        ),
        make_doc("cats.txt", "Cats are small carnivorous mammals. Cats sleep a lot."),
    ])
    .unwrap()
}

fn config(file_matches: usize, sentence_matches: usize) -> RetrievalConfig {
    RetrievalConfig {
        file_matches,
        sentence_matches,
    }
}

#[test]
fn test_answers_with_best_sentence_of_best_document() {
    let corpus = sample_corpus();
    let retriever = PassageRetriever::default();

    let result = retriever.retrieve(&corpus, "Who created Python?").unwrap();

    assert_eq!(result.retrieval.query_terms, vec!["created", "python"]);
    assert_eq!(result.retrieval.documents_considered, 3);
    assert_eq!(result.retrieval.documents_selected, vec!["python.txt"]);
    assert_eq!(result.retrieval.sentences_considered, 3);
    assert_eq!(result.retrieval.sentences_selected, 1);

    let passage = &result.passages[0];
    assert_eq!(passage.text, "It was created by Guido van Rossum.");
    assert_eq!(passage.source, "python.txt");
    assert_eq!(passage.why.matched_terms, vec!["created"]);
    assert_eq!(passage.why.total_words, 4);
    assert!((passage.matching_idf - 3.0f64.ln()).abs() < 1e-12);
    assert!((passage.density - 0.25).abs() < 1e-12);
}

#[test]
fn test_sentence_idf_is_local_to_selected_documents() {
    let corpus = sample_corpus();
    let retriever = PassageRetriever::default().with_config(config(1, 3));

    let result = retriever.retrieve(&corpus, "python readability").unwrap();

    // Within python.txt "python" occurs in two of three sentences, "readability" in one.
    let texts: Vec<&str> = result.passages.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Python emphasizes code readability.",
            "Python is a programming language.",
            "It was created by Guido van Rossum.",
        ]
    );
    assert_eq!(result.passages[2].matching_idf, 0.0);
}

#[test]
fn test_multiple_documents_feed_the_sentence_stage() {
    let corpus = sample_corpus();
    let retriever = PassageRetriever::default().with_config(config(2, 10));

    let result = retriever.retrieve(&corpus, "cats learning").unwrap();

    assert_eq!(result.retrieval.documents_selected, vec!["cats.txt", "ai.txt"]);
    assert_eq!(result.retrieval.sentences_considered, 4);
    assert_eq!(result.passages.len(), 4);
    assert!(result
        .passages
        .iter()
        .any(|p| p.source == "ai.txt" && p.text.starts_with("Machine learning")));
}

#[test]
fn test_duplicate_sentences_collapse_to_last_source() {
    let corpus = Corpus::from_documents(vec![
        make_doc("a.txt", "Cats sleep a lot. Dogs bark loudly."),
        make_doc("b.txt", "Cats sleep a lot."),
    ])
    .unwrap();
    let retriever = PassageRetriever::default();

    let ids = [DocumentId::new("a.txt"), DocumentId::new("b.txt")];
    let extracted = retriever.extract_sentences(&corpus, &ids);

    assert_eq!(extracted.len(), 2);
    assert_eq!(
        extracted.source("Cats sleep a lot.").map(DocumentId::as_str),
        Some("b.txt")
    );
    assert_eq!(
        extracted.get("Cats sleep a lot.").map(|entry| entry.tokens.as_slice()),
        Some(&["cats".to_string(), "sleep".to_string(), "lot".to_string()][..])
    );
}

#[test]
fn invariant_every_ranked_sentence_names_its_document() {
    let corpus = Corpus::from_documents(vec![
        make_doc("a.txt", "Cats sleep a lot. Dogs bark loudly."),
        make_doc("b.txt", "Cats sleep a lot.\nCats chase mice."),
    ])
    .unwrap();
    let retriever = PassageRetriever::default().with_config(config(2, 10));

    let ids = [DocumentId::new("a.txt"), DocumentId::new("b.txt")];
    let extracted = retriever.extract_sentences(&corpus, &ids);
    let collection = extracted.collection();
    assert_eq!(collection.len(), extracted.len());
    for (text, _) in collection.iter() {
        assert!(extracted.source(text).is_some(), "{text:?} has no source");
    }

    let result = retriever.retrieve(&corpus, "cats dogs").unwrap();
    assert_eq!(result.passages.len(), 3);
    for passage in &result.passages {
        assert!(!passage.source.is_empty());
        assert!(corpus.get(&DocumentId::new(&passage.source)).is_some());
    }
}

#[test]
fn test_sentences_without_tokens_are_excluded() {
    let corpus = Corpus::from_documents(vec![make_doc(
        "a.txt",
        "It is what it is.\n...\n\nCats purr.",
    )])
    .unwrap();
    let retriever = PassageRetriever::default().with_config(config(1, 5));

    let result = retriever.retrieve(&corpus, "cats").unwrap();

    assert_eq!(result.retrieval.sentences_considered, 1);
    assert_eq!(result.passages[0].text, "Cats purr.");
}

#[test]
fn test_empty_corpus_gives_empty_result() {
    let corpus = Corpus::from_documents(Vec::new()).unwrap();
    let retriever = PassageRetriever::default();

    let result = retriever.retrieve(&corpus, "anything").unwrap();

    assert!(result.passages.is_empty());
    assert!(result.retrieval.documents_selected.is_empty());
    assert_eq!(result.retrieval.documents_considered, 0);
}

#[test]
fn test_empty_query_falls_back_to_identifier_and_text_order() {
    let corpus = sample_corpus();
    let retriever = PassageRetriever::default();

    let result = retriever.retrieve(&corpus, "what is the").unwrap();

    assert!(result.retrieval.query_terms.is_empty());
    assert_eq!(result.retrieval.documents_selected, vec!["ai.txt"]);
    assert_eq!(
        result.passages[0].text,
        "Artificial intelligence is intelligence demonstrated by machines."
    );
    assert_eq!(result.passages[0].matching_idf, 0.0);
    assert_eq!(result.passages[0].density, 0.0);
}

#[test]
fn test_index_once_answer_many() {
    let corpus = sample_corpus();
    let retriever = PassageRetriever::default();
    let indexed = retriever.index(&corpus);

    assert_eq!(indexed.files.len(), 3);
    assert_eq!(indexed.idfs.collection_size(), 3);

    let cats = retriever.answer(&indexed, "Do cats sleep?").unwrap();
    let python = retriever.answer(&indexed, "Who created Python?").unwrap();

    assert_eq!(cats.passages[0].text, "Cats sleep a lot.");
    assert_eq!(python.passages[0].text, "It was created by Guido van Rossum.");
}
