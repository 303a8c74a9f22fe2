//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on ASCII whitespace.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count as
/// a single separator, so an empty or blank phrase yields no words. Other
/// Unicode spaces such as U+00A0 are part of a word.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_ascii_whitespace().map(String::from).collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
