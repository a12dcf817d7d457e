pub trait SentenceSegmenter {
    /// Sentences of one line or paragraph, trimmed, in order. Never yields empty strings.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Abbreviations (without their final period) that do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "cf", "fig", "approx",
    "inc", "ltd", "dept", "est", "u.s", "u.k",
];

/// v0: terminal-punctuation segmenter.
///
/// A sentence ends after a run of `.`, `!` or `?` (plus closing quotes or
/// brackets) that is followed by whitespace or the end of the text. A lone
/// period does not end a sentence when it closes a known abbreviation or an
/// initial, or when the next word starts in lowercase. An initial is a single
/// uppercase letter that opens the sentence or follows a capitalized word.
#[derive(Debug, Clone)]
pub struct PunctuationSegmenter {
    abbreviations: Vec<String>,
}

impl PunctuationSegmenter {
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    fn is_abbreviation(&self, preceding: &str) -> bool {
        let mut words = preceding
            .split_whitespace()
            .map(|w| w.trim_start_matches(|c: char| is_closer(c) || c == '(' || c == '['));
        let Some(word) = words.next_back() else {
            return false;
        };

        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            // "J. K. Rowling", "John F. Kennedy"; not "vitamin C."
            return c.is_uppercase()
                && words
                    .next_back()
                    .map_or(true, |prev| prev.starts_with(char::is_uppercase));
        }

        let word = word.to_lowercase();
        self.abbreviations.iter().any(|a| *a == word)
    }
}

impl Default for PunctuationSegmenter {
    fn default() -> Self {
        Self::new(ABBREVIATIONS.iter().copied())
    }
}

impl SentenceSegmenter for PunctuationSegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !is_terminator(chars[i].1) {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && is_terminator(chars[i].1) {
                i += 1;
            }
            let single_period = i - run_start == 1 && chars[run_start].1 == '.';
            while i < chars.len() && is_closer(chars[i].1) {
                i += 1;
            }

            if i < chars.len() && !chars[i].1.is_whitespace() {
                continue;
            }

            if single_period {
                let before = &text[start..chars[run_start].0];
                if self.is_abbreviation(before) || continues_lowercase(&chars[i..]) {
                    continue;
                }
            }

            let end = chars.get(i).map_or(text.len(), |&(b, _)| b);
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn continues_lowercase(rest: &[(usize, char)]) -> bool {
    rest.iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace())
        .is_some_and(char::is_lowercase)
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
