//! Token type produced by lexeme analysis.
//!
//! A [`Token`] is a value object: two tokens are equal only when their text,
//! position and origin flag all match. The scorer relies on this, so a word
//! counts as a match only when it sits at the same index with the same origin
//! in both phrases.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::token::Token;
//!
//! let token = Token::new("Малый", 0, false).unwrap();
//! assert_eq!(token.text, "Малый");
//! assert_eq!(token.position, 0);
//! assert!(!token.is_dictionary_origin());
//!
//! // Same text at a different position is a different token.
//! assert_ne!(token, Token::new("Малый", 1, false).unwrap());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};

/// A single lexical unit of an analyzed phrase.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Index in the expanded, stop-word-filtered sequence (0-based)
/// - `dictionary_origin` - Whether the text was introduced only by dictionary
///   expansion rather than written in the phrase itself
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the expanded token sequence (0-based)
    pub position: usize,

    /// True when `text` is not one of the phrase's original words
    pub dictionary_origin: bool,
}

impl Token {
    /// Create a new token.
    ///
    /// Fails with [`LexisError::InvalidToken`] when `text` is empty.
    pub fn new<S: Into<String>>(text: S, position: usize, dictionary_origin: bool) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(LexisError::invalid_token(format!(
                "token text at position {position} must not be empty"
            )));
        }

        Ok(Token {
            text,
            position,
            dictionary_origin,
        })
    }

    /// Check whether this token came purely from dictionary expansion.
    pub fn is_dictionary_origin(&self) -> bool {
        self.dictionary_origin
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dictionary_origin {
            write!(f, "{}:{}*", self.position, self.text)
        } else {
            write!(f, "{}:{}", self.position, self.text)
        }
    }
}
