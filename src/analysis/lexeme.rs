//! Lexeme analysis: tokenize, expand, filter, then tag.
//!
//! The pipeline applies processing in this order:
//! 1. Tokenizer: splits the phrase, trimmed of ASCII whitespace, into words
//! 2. Dictionary: each word is followed by its expansion forms
//! 3. Stop words: every occurrence of a stop word is removed
//! 4. Tagging: each survivor gets its index and an origin flag
//!
//! A token's origin flag is set when its text is not one of the phrase's own
//! words. An expansion that also appears literally in the phrase is therefore
//! not dictionary-origin.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::lexeme::build_lexemes;
//! use lexis::analysis::dictionary::AbbreviationDictionary;
//! use lexis::analysis::stop::StopWords;
//!
//! let tokens = build_lexemes(
//!     "Малый пер.",
//!     AbbreviationDictionary::builtin(),
//!     &StopWords::new(),
//! )
//! .unwrap();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Малый", "пер.", "переулок", "пер-ок"]);
//! assert!(!tokens[1].dictionary_origin);
//! assert!(tokens[2].dictionary_origin);
//! ```

use std::sync::Arc;

use ahash::AHashSet;
use log::debug;

use crate::analysis::dictionary::AbbreviationDictionary;
use crate::analysis::stop::StopWords;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::config::MatchConfig;
use crate::error::{LexisError, Result};

/// Analyze `phrase` with the whitespace tokenizer.
pub fn build_lexemes(
    phrase: &str,
    dictionary: &AbbreviationDictionary,
    stop_words: &StopWords,
) -> Result<Vec<Token>> {
    let words = WhitespaceTokenizer::new().tokenize(phrase.trim_ascii())?;
    expand_words(words, dictionary, stop_words)
}

/// Expand already-tokenized words and tag the result.
fn expand_words(
    words: Vec<String>,
    dictionary: &AbbreviationDictionary,
    stop_words: &StopWords,
) -> Result<Vec<Token>> {
    let expanded: Vec<String> = words
        .iter()
        .flat_map(|word| dictionary.expand(word))
        .collect();
    let expanded = stop_words.remove_from(expanded);

    let originals: AHashSet<&str> = words.iter().map(String::as_str).collect();

    expanded
        .into_iter()
        .enumerate()
        .map(|(position, text)| {
            let dictionary_origin = !originals.contains(text.as_str());
            Token::new(text, position, dictionary_origin)
        })
        .collect()
}

/// Reusable analyzer holding a tokenizer and a [`MatchConfig`].
#[derive(Clone)]
pub struct LexemeAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    config: MatchConfig,
}

impl Default for LexemeAnalyzer {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl LexemeAnalyzer {
    /// Create an analyzer using the whitespace tokenizer.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_tokenizer(Arc::new(WhitespaceTokenizer::new()), config)
    }

    /// Create an analyzer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>, config: MatchConfig) -> Self {
        LexemeAnalyzer { tokenizer, config }
    }

    /// Get the configuration used by this analyzer.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Turn a phrase into its ordered token sequence.
    pub fn analyze(&self, phrase: &str) -> Result<Vec<Token>> {
        let words = self.tokenizer.tokenize(phrase.trim_ascii())?;
        if let Some(index) = words.iter().position(String::is_empty) {
            return Err(LexisError::analysis(format!(
                "{} tokenizer produced an empty word at index {index}",
                self.tokenizer.name()
            )));
        }
        let tokens = expand_words(words, &self.config.dictionary, &self.config.stop_words)?;

        debug!(
            "{} analyzed {:?} into {} tokens: [{}]",
            self.tokenizer.name(),
            phrase,
            tokens.len(),
            tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(tokens)
    }
}
