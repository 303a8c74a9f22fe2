//! Tokenizer implementations for phrase analysis.
//!
//! Tokenizers are the first step of lexeme analysis: they split a raw phrase
//! into the words that dictionary expansion and stop-word removal operate on.
//! Positions are assigned later, after expansion, so a tokenizer only returns
//! the words in order.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on runs of whitespace
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::tokenizer::Tokenizer;
//! use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let words = tokenizer.tokenize("  Малый   пер. ").unwrap();
//! assert_eq!(words, vec!["Малый", "пер."]);
//! ```

use crate::error::Result;

/// Trait for tokenizers that split a phrase into words.
///
/// The trait requires `Send + Sync` so an analyzer holding one can be shared
/// across threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lexis::analysis::tokenizer::Tokenizer;
/// use lexis::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<Vec<String>> {
///         Ok(text
///             .split(',')
///             .map(str::trim)
///             .filter(|s| !s.is_empty())
///             .map(String::from)
///             .collect())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Split the given text into words, preserving their order.
    ///
    /// Implementations must never return empty words; the analyzer rejects
    /// them with an analysis error.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
