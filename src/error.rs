//! Error types for the Lexis library.
//!
//! All errors are represented by the [`LexisError`] enum. Constructor helpers
//! take anything convertible into a `String`.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::invalid_argument("Expected two params"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (writing results)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, expansion)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A token was constructed from unusable text
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The input phrase has no tokens that can serve as a denominator
    #[error("No comparable tokens: {0}")]
    NoComparableTokens(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisError::Analysis(msg.into())
    }

    /// Create a new invalid token error.
    pub fn invalid_token<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidToken(msg.into())
    }

    /// Create a new "no comparable tokens" error.
    pub fn no_comparable_tokens<S: Into<String>>(msg: S) -> Self {
        LexisError::NoComparableTokens(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidArgument(msg.into())
    }
}
