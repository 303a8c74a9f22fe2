//! Phrase analysis for Lexis.
//!
//! Turns a raw phrase into an ordered sequence of [`Token`]s: whitespace
//! tokenization, abbreviation expansion, stop-word removal and origin tagging.

pub mod dictionary;
pub mod lexeme;
pub mod stop;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use dictionary::AbbreviationDictionary;
pub use lexeme::{LexemeAnalyzer, build_lexemes};
pub use stop::StopWords;
pub use token::Token;
pub use tokenizer::Tokenizer;
