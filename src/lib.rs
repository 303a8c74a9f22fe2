//! # Lexis
//!
//! Dictionary-aware similarity ratio for short address-like phrases.
//!
//! ## Features
//!
//! - Whitespace tokenization with abbreviation expansion
//! - Stop word removal
//! - Position- and origin-exact token matching
//! - Directional match ratio with a detailed report
//!
//! ## Example
//!
//! ```
//! use lexis::similarity::string_diff_ratio;
//!
//! let ratio = string_diff_ratio("Малый пер.", "Малый пр.").unwrap();
//! assert_eq!(ratio, 0.5);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod similarity;

pub mod prelude {
    pub use crate::analysis::{AbbreviationDictionary, LexemeAnalyzer, StopWords, Token};
    pub use crate::config::MatchConfig;
    pub use crate::error::{LexisError, Result};
    pub use crate::similarity::{MatchReport, RatioScorer, ratio, score, string_diff_ratio};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
