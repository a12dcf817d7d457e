//! Text normalization collaborators: word tokenizer and sentence segmenter.
//!
//! The ranking core depends only on the [`WordTokenizer`] and
//! [`SentenceSegmenter`] traits.

pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

pub use segmenter::{PunctuationSegmenter, SentenceSegmenter};
pub use stopwords::StopWords;
pub use tokenizer::{StopwordTokenizer, WordTokenizer};
