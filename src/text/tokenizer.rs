use super::stopwords::StopWords;

pub trait WordTokenizer {
    /// Normalized word tokens of `text`, in order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Contraction suffixes split off their host word (`python's` → `python` `'s`).
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// v0: whitespace tokenizer with punctuation and stopword removal.
///
/// Each whitespace-separated chunk is lowercased and has its leading and
/// trailing punctuation (any non-alphanumeric character, Unicode included)
/// detached. Chunks that are pure punctuation vanish; interior punctuation
/// (`e-mail`, `3.14`) is kept. Clitics such as `'s` and `n't` become tokens of
/// their own. Finally stopwords are dropped.
#[derive(Debug, Clone)]
pub struct StopwordTokenizer {
    stopwords: StopWords,
}

impl StopwordTokenizer {
    pub fn new(stopwords: StopWords) -> Self {
        Self { stopwords }
    }

    pub fn english() -> Self {
        Self::new(StopWords::english())
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    fn push_word(&self, word: &str, tokens: &mut Vec<String>) {
        let word = trim_punctuation(word);
        if !word.is_empty() && !self.stopwords.contains(word) {
            tokens.push(word.to_string());
        }
    }
}

impl Default for StopwordTokenizer {
    fn default() -> Self {
        Self::english()
    }
}

impl WordTokenizer for StopwordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase().replace('\u{2019}', "'");
        let mut tokens = Vec::new();

        for chunk in lower.split_whitespace() {
            let (host, clitics) = split_clitics(chunk);
            self.push_word(host, &mut tokens);
            for clitic in clitics.iter().rev() {
                self.push_word(clitic, &mut tokens);
            }
        }

        tokens
    }
}

fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Peel clitics off the end of `chunk`, innermost last.
fn split_clitics(chunk: &str) -> (&str, Vec<&str>) {
    let mut host = trim_punctuation(chunk);
    let mut clitics = Vec::new();

    while let Some(clitic) = CLITICS
        .iter()
        .find(|c| host.len() > c.len() && host.ends_with(**c))
    {
        let (rest, suffix) = host.split_at(host.len() - clitic.len());
        clitics.push(suffix);
        host = trim_punctuation(rest);
    }

    (host, clitics)
}
